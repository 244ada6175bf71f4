/// Filesystem adapters for fixture input and report output
mod file_writer;
mod fixture_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use fixture_reader::FileSystemReader;
