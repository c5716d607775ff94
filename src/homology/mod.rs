// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use boundary::{boundary, BoundaryMatrix};
pub use group::{compute_homology, compute_homology_with, homology_from_boundaries, HomologyGroup};
pub use smith::SmithNormalForm;

mod boundary;
mod group;
mod smith;
