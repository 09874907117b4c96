//! Seeded triangular-lattice generative animation.
//!
//! The crate splits into a deterministic core, a Mersenne Twister variant
//! ([`prng`]) feeding a two-stage point scatter and a lattice-snapping pass
//! ([`lattice`]), and a thin presentation layer (the `trilattice` binary)
//! that paints the resulting stroke and fill batches every frame.
//!
//! The core is a pure function of (seed, parameters, frame time): the same
//! inputs always reproduce the same batches, and nothing is retained across
//! frames.
//!
//! # Examples
//!
//! ```
//! use trilattice::{lattice, prng::MersenneTwister};
//!
//! let mut rng = MersenneTwister::new(3);
//! let vertices = lattice::scatter(&mut rng, 2, 2, 100.0, 1024.0, 0.0);
//! let batch = lattice::snap_to_lattice(&mut rng, &vertices, 8.0, 1024.0, 1024.0, 0.95);
//! assert!(batch.strokes.len() <= vertices.len());
//! ```

pub mod lattice;
pub mod params;
pub mod prng;
