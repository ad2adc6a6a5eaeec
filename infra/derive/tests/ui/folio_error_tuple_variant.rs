use folio_derive::folio_error;

#[folio_error]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
