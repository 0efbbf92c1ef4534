//! The interactive menu loop

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::command::{menu, Command};
use crate::config::SessionConfig;
use crate::request::{Request, RequestError};
use crate::tasks;

/// Run the menu until the user exits or the input ends
///
/// Task results go to `out`; the menu, prompts and errors go to the
/// request's diagnostic stream. Only a failing stream is returned as an
/// error.
pub fn run<R, W, O>(
    request: &mut Request<R, W>,
    out: &mut O,
    config: &SessionConfig,
) -> Result<(), RequestError>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    info!("session started");
    let menu = menu();

    loop {
        match step(request, out, config, &menu) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(RequestError::Closed) => {
                debug!("input closed");
                break;
            }
            Err(error) => return Err(error),
        }
    }

    info!("session finished");
    Ok(())
}

/// Show the menu, read one selector and act on it
///
/// Returns `false` once the user asked to exit.
fn step<R, W, O>(
    request: &mut Request<R, W>,
    out: &mut O,
    config: &SessionConfig,
    menu: &str,
) -> Result<bool, RequestError>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    request.message(menu)?;
    let selector = request.scalar::<String>("Select task")?;

    match selector.parse::<Command>() {
        Ok(Command::Exit) => return Ok(false),
        Ok(Command::Run(task)) => tasks::run(task, request, out, config)?,
        Err(error) => request.report(error)?,
    }

    Ok(true)
}
