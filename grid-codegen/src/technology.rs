//! Target technologies and the strategy table describing each one.

use std::fmt;
use std::str::FromStr;

use grid_core::CodeFormat;
use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

/// A framework or styling approach code can be generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technology {
    /// Tailwind CSS utility classes.
    #[default]
    Tailwind,
    /// Plain CSS grid properties.
    RawCss,
    /// Material UI (`@mui/material`).
    MaterialUi,
    /// Ant Design (`antd`).
    AntDesign,
    /// Mantine (`@mantine/core`).
    Mantine,
    /// Chakra UI (`@chakra-ui/react`).
    ChakraUi,
}

/// How a technology expresses one-row-tall layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowUnits {
    /// Always uses explicit two-axis placement.
    None,
    /// A fixed-width column system; spans are rescaled to it.
    Fixed(u32),
    /// Column templates sized to the grid itself; spans are kept.
    Native,
}

/// Whether a technology can place items with utility classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilitySupport {
    /// Output is utility classes regardless of options.
    Always,
    /// Utility classes replace inline styles when requested.
    Toggle,
    /// Inline styles only.
    Never,
}

/// Strategy record for one technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnologyProfile {
    /// URL slug and CLI name.
    pub slug: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Flow layout unit system.
    pub flow: FlowUnits,
    /// Utility class support.
    pub utility: UtilitySupport,
    /// Whether a standalone HTML document can be emitted.
    pub standalone: bool,
    /// Getting-started link printed as a header comment.
    pub quickstart: Option<&'static str>,
}

const PROFILES: [TechnologyProfile; 6] = [
    TechnologyProfile {
        slug: "tailwind",
        label: "Tailwind CSS",
        flow: FlowUnits::None,
        utility: UtilitySupport::Always,
        standalone: true,
        quickstart: Some("https://tailwindcss.com/docs/installation/using-vite"),
    },
    TechnologyProfile {
        slug: "raw-css",
        label: "CSS",
        flow: FlowUnits::None,
        utility: UtilitySupport::Never,
        standalone: true,
        quickstart: None,
    },
    TechnologyProfile {
        slug: "material-ui",
        label: "Material UI",
        flow: FlowUnits::Fixed(12),
        utility: UtilitySupport::Never,
        standalone: false,
        quickstart: Some("https://mui.com/material-ui/getting-started/installation/"),
    },
    TechnologyProfile {
        slug: "ant-design",
        label: "Ant Design",
        flow: FlowUnits::Fixed(24),
        utility: UtilitySupport::Never,
        standalone: false,
        quickstart: Some("https://ant.design/docs/react/introduce"),
    },
    TechnologyProfile {
        slug: "mantine",
        label: "Mantine",
        flow: FlowUnits::Fixed(12),
        utility: UtilitySupport::Toggle,
        standalone: false,
        quickstart: Some("https://mantine.dev/getting-started/"),
    },
    TechnologyProfile {
        slug: "chakra-ui",
        label: "Chakra UI",
        flow: FlowUnits::Native,
        utility: UtilitySupport::Never,
        standalone: false,
        quickstart: Some("https://chakra-ui.com/docs/get-started/installation"),
    },
];

impl Technology {
    /// Every technology, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Tailwind,
        Self::RawCss,
        Self::MaterialUi,
        Self::AntDesign,
        Self::Mantine,
        Self::ChakraUi,
    ];

    /// Strategy record for this technology.
    #[must_use]
    pub const fn profile(self) -> &'static TechnologyProfile {
        match self {
            Self::Tailwind => &PROFILES[0],
            Self::RawCss => &PROFILES[1],
            Self::MaterialUi => &PROFILES[2],
            Self::AntDesign => &PROFILES[3],
            Self::Mantine => &PROFILES[4],
            Self::ChakraUi => &PROFILES[5],
        }
    }

    /// URL slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        self.profile().slug
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.profile().label
    }

    /// Output format actually produced for a requested format.
    ///
    /// Technologies without standalone support always emit a component.
    #[must_use]
    pub const fn effective_format(self, requested: CodeFormat) -> CodeFormat {
        if self.profile().standalone {
            requested
        } else {
            CodeFormat::Embedded
        }
    }

    /// Syntax highlighting language of the generated code.
    #[must_use]
    pub const fn language(self, format: CodeFormat) -> &'static str {
        match self.effective_format(format) {
            CodeFormat::Embedded => "tsx",
            CodeFormat::Standalone => "html",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Technology {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tech| tech.slug() == wanted)
            .ok_or_else(|| CodegenError::UnknownTechnology(s.to_string()))
    }
}
