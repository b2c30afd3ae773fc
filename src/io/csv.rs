use std::io::{self, Write};
use std::path::Path;

use crate::solver::Trajectory;

/// Write trajectory data to CSV format.
///
/// Columns: t, u0, u1, ... (one per state component)
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    let header: Vec<String> = std::iter::once("t".to_string())
        .chain((0..trajectory.dim()).map(|i| format!("u{}", i)))
        .collect();
    writeln!(writer, "{}", header.join(","))?;

    for (t, u) in trajectory.iter() {
        write!(writer, "{:.6}", t)?;
        for v in u.iter() {
            write!(writer, ",{:.9}", v)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_trajectory(&mut writer, trajectory)?;
    writer.flush()
}
