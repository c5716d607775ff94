// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use distance::DistanceIndex;
pub use points::{Point, PointCloud};
pub use simplex::{Combinations, Simplex};
pub use simplicial::{ComplexBuilder, SimplicialComplex};
pub use traits::ComplexLike;

mod distance;
mod points;
mod simplex;
mod simplicial;
mod traits;
