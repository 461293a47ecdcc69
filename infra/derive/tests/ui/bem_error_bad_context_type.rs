use bemkit_derive::bem_error;

#[bem_error]
pub enum LoadError {
    #[error("Read failure: {source}")]
    Read { source: std::io::Error, context: Option<String> },
}

fn main() {}
