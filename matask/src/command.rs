//! Menu selector parsing

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four matrix tasks offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    CountNegatives,
    SwapRowDiagonal,
    SortAntiDiagonal,
    SortColumns,
}

impl Task {
    /// All tasks in menu order
    pub const ALL: [Task; 4] = [
        Task::CountNegatives,
        Task::SwapRowDiagonal,
        Task::SortAntiDiagonal,
        Task::SortColumns,
    ];

    /// Menu number of the task
    pub fn number(self) -> u8 {
        match self {
            Task::CountNegatives => 1,
            Task::SwapRowDiagonal => 2,
            Task::SortAntiDiagonal => 3,
            Task::SortColumns => 4,
        }
    }

    /// One-line menu description
    pub fn description(self) -> &'static str {
        match self {
            Task::CountNegatives => "Count negative elements in the matrix.",
            Task::SwapRowDiagonal => {
                "Swap the corresponding elements of the first row and the main diagonal."
            }
            Task::SortAntiDiagonal => {
                "Sort the side diagonal of the matrix from the minimum right-top to the maximum left-bottom."
            }
            Task::SortColumns => "Sort the columns of the matrix by non-decreasing minimum element.",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.description())
    }
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run(Task),
    Exit,
}

/// A menu selection that names no command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown task: {0}")]
    UnknownTask(i64),

    #[error("Invalid input '{0}'")]
    InvalidSelector(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();

        if input == "exit" {
            return Ok(Command::Exit);
        }

        let number = input
            .parse::<i64>()
            .map_err(|_| CommandError::InvalidSelector(input.clone()))?;

        Task::ALL
            .into_iter()
            .find(|task| i64::from(task.number()) == number)
            .map(Command::Run)
            .ok_or(CommandError::UnknownTask(number))
    }
}

/// Menu text listing every task and the exit command
pub fn menu() -> String {
    let mut text = String::from("Tasks:");
    for task in Task::ALL {
        text.push_str(&format!("\n    {task}"));
    }
    text.push_str("\nOr type 'exit' to exit the program.");
    text
}
