//! # Gridforge Code Generator
//!
//! Turns a [`GridState`] into ready-to-paste layout code.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────┐   ┌──────────────────┐   ┌────────────┐   ┌──────────┐
//! │ GridState │──▶│ TechnologyProfile│──▶│ LayoutPlan │──▶│ template │──▶ String
//! └───────────┘   │ (strategy table) │   │ sort, path │   │ per tech │
//!                 └──────────────────┘   └────────────┘   └──────────┘
//! ```
//!
//! Generation is pure: the same state, technology and options always yield
//! byte-identical output.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classes;
pub mod error;
pub mod layout;
pub mod markup;
pub mod options;
pub mod refresh;
pub mod technology;

pub use error::{CodegenError, CodegenResult};
pub use layout::{LayoutPath, LayoutPlan, PlacedItem};
pub use options::{parse_format, GeneratorOptions};
pub use refresh::RefreshHold;
pub use technology::{FlowUnits, Technology, TechnologyProfile, UtilitySupport};

use grid_core::GridState;

/// Generate code for `state` in the given technology.
#[must_use]
pub fn generate(state: &GridState, technology: Technology, options: &GeneratorOptions) -> String {
    let plan = LayoutPlan::new(state, technology.profile());
    let options = GeneratorOptions {
        format: technology.effective_format(options.format),
        ..*options
    };

    let code = match technology {
        Technology::Tailwind => markup::tailwind::render(&plan, &options),
        Technology::RawCss => markup::raw_css::render(&plan, &options),
        Technology::MaterialUi => markup::material_ui::render(&plan, &options),
        Technology::AntDesign => markup::ant_design::render(&plan, &options),
        Technology::Mantine => markup::mantine::render(&plan, &options),
        Technology::ChakraUi => markup::chakra_ui::render(&plan, &options),
    };

    tracing::trace!(
        "Generated {} bytes of {technology} ({:?}, {} items)",
        code.len(),
        plan.path,
        plan.items.len()
    );
    code
}

/// Generate Tailwind CSS markup.
#[must_use]
pub fn generate_tailwind(state: &GridState, options: &GeneratorOptions) -> String {
    generate(state, Technology::Tailwind, options)
}

/// Generate plain CSS grid markup.
#[must_use]
pub fn generate_raw_css(state: &GridState, options: &GeneratorOptions) -> String {
    generate(state, Technology::RawCss, options)
}

/// Generate a Material UI component.
#[must_use]
pub fn generate_material_ui(state: &GridState, options: &GeneratorOptions) -> String {
    generate(state, Technology::MaterialUi, options)
}

/// Generate an Ant Design component.
#[must_use]
pub fn generate_ant_design(state: &GridState, options: &GeneratorOptions) -> String {
    generate(state, Technology::AntDesign, options)
}

/// Generate a Mantine component.
#[must_use]
pub fn generate_mantine(state: &GridState, options: &GeneratorOptions) -> String {
    generate(state, Technology::Mantine, options)
}

/// Generate a Chakra UI component.
#[must_use]
pub fn generate_chakra_ui(state: &GridState, options: &GeneratorOptions) -> String {
    generate(state, Technology::ChakraUi, options)
}
