//! Compile steps and sequences
//!
//! A build is an ordered list of steps, each an external command template
//! plus a human-readable description template. Both templates use the
//! placeholders understood by [`crate::domain::services::format_command`].

/// Description shown while running a typesetting pass
const TEX_DESCRIPTION: &str = "compiling \"{tex_file}\"";

/// Description shown while running the bibliography tool
const BIBTEX_DESCRIPTION: &str = "running bibtex on \"{file}\"";

/// One pass of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileStep {
    /// Command template run through the shell
    pub command: String,
    /// Description template printed as progress
    pub description: String,
    /// When set, the step never fails the build (bibliography resolution)
    pub tolerate_failure: bool,
}

impl CompileStep {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            tolerate_failure: false,
        }
    }

    /// Mark this step as one whose failure is swallowed
    pub fn tolerant(mut self) -> Self {
        self.tolerate_failure = true;
        self
    }
}

/// An immutable ordered list of compile steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSequence {
    steps: Vec<CompileStep>,
}

impl CompileSequence {
    pub fn new(steps: Vec<CompileStep>) -> Self {
        Self { steps }
    }

    /// Full build: compile, bibtex, compile, compile
    pub fn full(tex_command: &str, bibtex_command: &str) -> Self {
        Self::new(vec![
            CompileStep::new(tex_command, TEX_DESCRIPTION),
            CompileStep::new(bibtex_command, BIBTEX_DESCRIPTION).tolerant(),
            CompileStep::new(tex_command, TEX_DESCRIPTION),
            CompileStep::new(tex_command, TEX_DESCRIPTION),
        ])
    }

    /// Single pass used when the watcher sees a change
    pub fn update(tex_command: &str) -> Self {
        Self::new(vec![CompileStep::new(tex_command, TEX_DESCRIPTION)])
    }

    pub fn steps(&self) -> &[CompileStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
