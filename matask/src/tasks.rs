//! The four menu tasks
//!
//! Each task is a plain function over a [`Matrix`]; [`run`] reads the
//! matrix through a [`Request`], applies the task and writes the result.

use std::io::{BufRead, Write};

use log::info;
use matask_core::{DiagonalKind, Element, Matrix, MatrixError};

use crate::command::Task;
use crate::config::{ColumnKey, ElementKind, SessionConfig};
use crate::request::{Request, RequestError};

/// Count the elements strictly less than zero
pub fn count_negatives<E: Element>(matrix: &Matrix<E>) -> usize {
    matrix.iter().filter(|value| value.is_negative()).count()
}

/// Swap the first row with the main diagonal, element by element
///
/// Element `(0, i)` is exchanged with `(i, i)`; `(0, 0)` stays put. The
/// caller guarantees the matrix is square.
pub fn swap_row_with_diagonal<E>(matrix: &mut Matrix<E>) {
    for i in 0..matrix.rows() {
        matrix.swap_elements((0, i), (i, i));
    }
}

/// Sort the side diagonal from the minimum at the top-right corner to the
/// maximum at the bottom-left corner
///
/// Uses [`Matrix::sort_diagonal_by`], which stops after the first pass that
/// swaps nothing. The caller guarantees the matrix is square.
pub fn sort_anti_diagonal<E: Element>(matrix: &mut Matrix<E>) {
    matrix.sort_diagonal_by(DiagonalKind::Anti, E::total_cmp);
}

/// Reorder whole columns by their largest or smallest element, ascending
///
/// Columns with equal keys keep their relative order. An empty column
/// sorts as if its key were zero.
pub fn sort_columns<E: Element>(matrix: &mut Matrix<E>, key: ColumnKey) -> Result<(), MatrixError> {
    matrix.transpose();

    let mut columns = std::mem::take(matrix).into_rows();
    columns.sort_by(|a, b| column_key(a, key).total_cmp(&column_key(b, key)));

    *matrix = Matrix::from_rows(columns)?;
    matrix.transpose();
    Ok(())
}

fn column_key<E: Element>(column: &[E], key: ColumnKey) -> E {
    column
        .iter()
        .copied()
        .reduce(|best, value| {
            let better = match key {
                ColumnKey::Max => value.total_cmp(&best).is_gt(),
                ColumnKey::Min => value.total_cmp(&best).is_lt(),
            };
            if better {
                value
            } else {
                best
            }
        })
        .unwrap_or_else(E::zero)
}

/// Read a matrix for `task`, run it and write the result to `out`
pub fn run<R, W, O>(
    task: Task,
    request: &mut Request<R, W>,
    out: &mut O,
    config: &SessionConfig,
) -> Result<(), RequestError>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    info!("running task {} on {:?} elements", task.number(), config.element);

    match config.element {
        ElementKind::I32 => run_typed::<i32, _, _, _>(task, request, out, config.column_key),
        ElementKind::I64 => run_typed::<i64, _, _, _>(task, request, out, config.column_key),
        ElementKind::F64 => run_typed::<f64, _, _, _>(task, request, out, config.column_key),
    }
}

fn run_typed<E, R, W, O>(
    task: Task,
    request: &mut Request<R, W>,
    out: &mut O,
    column_key: ColumnKey,
) -> Result<(), RequestError>
where
    E: Element,
    R: BufRead,
    W: Write,
    O: Write,
{
    match task {
        Task::CountNegatives => {
            let matrix = request.matrix::<E>()?;
            writeln!(out, "{}", count_negatives(&matrix))?;
        }
        Task::SwapRowDiagonal => {
            let mut matrix = request.square_matrix::<E>()?;
            swap_row_with_diagonal(&mut matrix);
            writeln!(out, "{matrix}")?;
        }
        Task::SortAntiDiagonal => {
            let mut matrix = request.square_matrix::<E>()?;
            sort_anti_diagonal(&mut matrix);
            writeln!(out, "{matrix}")?;
        }
        Task::SortColumns => {
            let mut matrix = request.matrix::<E>()?;
            match sort_columns(&mut matrix, column_key) {
                Ok(()) => writeln!(out, "{matrix}")?,
                Err(error) => request.report(error)?,
            }
        }
    }

    out.flush()?;
    Ok(())
}
