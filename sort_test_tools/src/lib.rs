/// A sort implementation under test, fixed to `i32` elements.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i32]);
}

pub mod inversion_oracle;
pub mod patterns;
