use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use superbible::ExampleKind;

#[derive(Debug, Parser)]
#[command(about = "OpenGL SuperBible chapter 2 and 3 samples")]
pub struct Args {
    /// Sample program to run
    #[arg(value_enum, default_value_t = ExampleArg::Tessellation)]
    pub example: ExampleArg,
    /// json5 manifest naming shader files to use instead of the built-in ones
    #[arg(long)]
    pub shaders: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExampleArg {
    SimpleApplication,
    FirstTriangle,
    VertexAttributes,
    PassingData,
    Tessellation,
    TessellatedTriangle,
}

impl From<ExampleArg> for ExampleKind {
    fn from(e: ExampleArg) -> Self {
        match e {
            ExampleArg::SimpleApplication => Self::SimpleApplication,
            ExampleArg::FirstTriangle => Self::FirstTriangle,
            ExampleArg::VertexAttributes => Self::VertexAttributes,
            ExampleArg::PassingData => Self::PassingData,
            ExampleArg::Tessellation => Self::Tessellation,
            ExampleArg::TessellatedTriangle => Self::TessellatedTriangle,
        }
    }
}
