use bemkit_derive::bem_error;

#[bem_error]
pub enum LoadError {
    #[error("Read failure: {0}")]
    Read(std::io::Error),
}

fn main() {}
