use folio_derive::folio_error;

#[folio_error]
pub enum LoadError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
