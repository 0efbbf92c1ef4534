//! Session configuration

use clap::ValueEnum;

/// When the reader echoes a freshly entered matrix back to the diagnostic stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EchoPolicy {
    /// After every matrix
    #[default]
    Always,
    /// Only when at least one line had to be re-entered
    OnError,
    /// Never
    Never,
}

/// Extreme element used to order columns in the column sorting task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColumnKey {
    /// Order columns by their largest element
    #[default]
    Max,
    /// Order columns by their smallest element
    Min,
}

/// Element type of the matrices read during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ElementKind {
    /// 32-bit signed integers
    #[default]
    I32,
    /// 64-bit signed integers
    I64,
    /// 64-bit floats
    F64,
}

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Style prompts and diagnostics with ANSI escapes
    pub color: bool,
    /// When to echo an entered matrix
    pub echo: EchoPolicy,
    /// Ordering key for the column sorting task
    pub column_key: ColumnKey,
    /// Element type of entered matrices
    pub element: ElementKind,
}

impl SessionConfig {
    /// Plain configuration without styling, useful for scripted input
    pub fn plain() -> Self {
        Self::default().with_color(false)
    }

    /// Enable or disable ANSI styling
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the matrix echo policy
    pub fn with_echo(mut self, echo: EchoPolicy) -> Self {
        self.echo = echo;
        self
    }

    /// Set the column ordering key
    pub fn with_column_key(mut self, column_key: ColumnKey) -> Self {
        self.column_key = column_key;
        self
    }

    /// Set the element type
    pub fn with_element(mut self, element: ElementKind) -> Self {
        self.element = element;
        self
    }

    /// Whether a matrix should be echoed, given whether its input needed retries
    pub fn should_echo(&self, had_errors: bool) -> bool {
        match self.echo {
            EchoPolicy::Always => true,
            EchoPolicy::OnError => had_errors,
            EchoPolicy::Never => false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color: true,
            echo: EchoPolicy::Always,
            column_key: ColumnKey::Max,
            element: ElementKind::I32,
        }
    }
}
