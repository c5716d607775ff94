// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use chain::Chain;
pub use cyclic::Cyclic;
pub use traits::{Additive, AlgebraicBase, EuclideanRing, ModuleLike, Multiplicative, RingLike};

mod chain;
mod cyclic;
mod integer;
mod traits;
