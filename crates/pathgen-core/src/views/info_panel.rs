//! Static info/output pane.

use std::fmt;

/// One titled block of the info pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoSection {
    pub heading: &'static str,
    pub body: &'static str,
}

const SECTIONS: [InfoSection; 3] = [
    InfoSection {
        heading: "Documentación",
        body: "Próximamente: Documentación contextual generada por IA",
    },
    InfoSection {
        heading: "Misiones Secundarias",
        body: "Próximamente: Casos edge que otorgan XP adicional",
    },
    InfoSection {
        heading: "Resultados",
        body: "Los resultados de los tests aparecerán aquí",
    },
];

/// Right-hand pane of the workspace. Its content does not depend on the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoPanel;

impl InfoPanel {
    pub const TITLE: &'static str = "Info / Salida";

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    pub fn sections(&self) -> &'static [InfoSection] {
        &SECTIONS
    }
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title())?;
        for section in self.sections() {
            writeln!(f)?;
            writeln!(f, "### {}", section.heading)?;
            writeln!(f)?;
            writeln!(f, "{}", section.body)?;
        }
        Ok(())
    }
}
