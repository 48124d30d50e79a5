// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod overview;
pub mod trend;
pub mod products;
pub mod geo;
pub mod options;
pub mod export;
pub mod doctor;
