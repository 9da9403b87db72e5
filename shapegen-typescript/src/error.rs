use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<RenderError>>;

/// Rendering-policy violations. Every one aborts the pass.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("type {name} is a non-const declaration, which is unhandled")]
    #[diagnostic(
        code(shapegen::render::missing_const_value),
        help("only constants with a literal value can appear in an enum or a member type")
    )]
    MissingConstValue { name: String },
}
