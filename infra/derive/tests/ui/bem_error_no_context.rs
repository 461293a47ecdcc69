use bemkit_derive::bem_error;

#[bem_error]
pub enum LoadError {
    #[error("Read failure: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
