//
// Uses
//

use std::io::{self, BufRead, Write};

use clap::Parser;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matwork::dense::{DenseMatrix, CELL_WIDTH};
use matwork::dims::{Dims, HasDims};
use matwork::error::{MatrixError, MatrixResult};
use matwork::reader::TokenReader;

//
// Implementation
//

const MENU: &str = "\
===== MATRIX OPERATIONS MENU =====
1. Add Two Matrices
2. Subtract Two Matrices
3. Multiply Two Matrices
4. Transpose a Matrix
5. Scalar Multiply
6. Exit";

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "An interactive dense-matrix calculator. Prompts for dimensions and cell values, runs the selected operation, and prints the result as aligned rows of numbers"
)]
struct Args {
    /// Cell width used when printing result matrices
    #[arg(long, value_name = "NUM", default_value_t = CELL_WIDTH)]
    width: usize,

    /// Print result matrices as JSON rows instead of an aligned table
    #[arg(long)]
    json: bool,
}

fn prompt(text: &str) -> MatrixResult<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

fn read_dims_prompted<B: BufRead>(reader: &mut TokenReader<B>) -> MatrixResult<Dims> {
    prompt("Rows: ")?;
    let rows: i64 = reader.read_value()?;
    prompt("Cols: ")?;
    let cols: i64 = reader.read_value()?;
    Dims::from_signed(rows, cols)
}

fn read_matrix_prompted<B: BufRead>(
    reader: &mut TokenReader<B>,
    label: &str,
    dims: Dims,
) -> MatrixResult<DenseMatrix<f64>> {
    println!("\nEnter Matrix {} values ({}):", label, dims);
    reader.read_matrix(dims)
}

fn print_result(banner: &str, result: &DenseMatrix<f64>, args: &Args) {
    println!("\n--- Result ({}) ---", banner);
    if args.json {
        match serde_json::to_string(result) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Error: {}", e),
        }
    } else {
        println!("{}", result.render(args.width));
    }
}

fn add_matrices<B: BufRead>(reader: &mut TokenReader<B>, args: &Args) -> MatrixResult<()> {
    println!("\nEnter size of matrices:");
    let dims = read_dims_prompted(reader)?;
    let a = read_matrix_prompted(reader, "A", dims)?;
    let b = read_matrix_prompted(reader, "B", dims)?;

    let result = a.try_add(&b)?;
    tracing::debug!(shape = %result.dims(), "added matrices");
    print_result("A + B", &result, args);
    Ok(())
}

fn subtract_matrices<B: BufRead>(reader: &mut TokenReader<B>, args: &Args) -> MatrixResult<()> {
    println!("\nEnter size of matrices:");
    let dims = read_dims_prompted(reader)?;
    let a = read_matrix_prompted(reader, "A", dims)?;
    let b = read_matrix_prompted(reader, "B", dims)?;

    let result = a.try_sub(&b)?;
    tracing::debug!(shape = %result.dims(), "subtracted matrices");
    print_result("A - B", &result, args);
    Ok(())
}

fn multiply_matrices<B: BufRead>(reader: &mut TokenReader<B>, args: &Args) -> MatrixResult<()> {
    println!("\nEnter size of Matrix A:");
    let dims_a = read_dims_prompted(reader)?;
    println!("\nEnter size of Matrix B:");
    let dims_b = read_dims_prompted(reader)?;

    let a = read_matrix_prompted(reader, "A", dims_a)?;
    let b = read_matrix_prompted(reader, "B", dims_b)?;

    let result = a.try_matmul(&b)?;
    tracing::debug!(lhs = %dims_a, rhs = %dims_b, shape = %result.dims(), "multiplied matrices");
    print_result("A x B", &result, args);
    Ok(())
}

fn transpose_matrix<B: BufRead>(reader: &mut TokenReader<B>, args: &Args) -> MatrixResult<()> {
    println!("\nEnter size of Matrix:");
    let dims = read_dims_prompted(reader)?;
    let a = read_matrix_prompted(reader, "A", dims)?;

    let result = a.transpose();
    print_result("Transpose", &result, args);
    Ok(())
}

fn scalar_multiply<B: BufRead>(reader: &mut TokenReader<B>, args: &Args) -> MatrixResult<()> {
    println!("\nEnter size of matrix:");
    let dims = read_dims_prompted(reader)?;
    let a = read_matrix_prompted(reader, "A", dims)?;

    prompt("\nEnter scalar value: ")?;
    let s: f64 = reader.read_value()?;

    let result = a.scaled(s);
    print_result("Scalar x Matrix", &result, args);
    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());

    loop {
        println!("\n{}", MENU);
        if prompt("Enter choice: ").is_err() {
            return;
        }

        let choice: i64 = match reader.read_value() {
            Ok(v) => v,
            // End of input: leave the loop instead of re-prompting forever.
            Err(MatrixError::NotEnoughValues { .. }) => return,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };

        let outcome = match choice {
            1 => add_matrices(&mut reader, &args),
            2 => subtract_matrices(&mut reader, &args),
            3 => multiply_matrices(&mut reader, &args),
            4 => transpose_matrix(&mut reader, &args),
            5 => scalar_multiply(&mut reader, &args),
            6 => return,
            _ => {
                println!("Invalid choice!");
                continue;
            }
        };

        match outcome {
            Ok(()) => (),
            Err(e @ MatrixError::NotEnoughValues { .. }) => {
                println!("Error: {}", e);
                return;
            }
            Err(e) => println!("Error: {}", e),
        }
    }
}
