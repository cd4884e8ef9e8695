//! Distribution samplers built on key splitting and bit extraction.
//!
//! Every sampler is a pure function of a [`Key`](crate::key::Key) and its
//! parameters: calling it twice with the same arguments returns bit-identical
//! buffers, and keys obtained from `split` produce statistically independent
//! streams. Output buffers are flat, row-major, with `product(shape)`
//! elements.

mod gamma;
mod randint;
mod shuffle;
mod transforms;
mod uniform;

pub use gamma::{beta, gamma, gamma_each};
pub use randint::randint;
pub use shuffle::shuffle;
pub use transforms::{bernoulli, cauchy, exponential, gumbel, laplace, normal, pareto};
pub use uniform::uniform;
