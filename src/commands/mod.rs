// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod login;
pub mod accounts;
pub mod transactions;
pub mod webhooks;
pub mod attachments;
