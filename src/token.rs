// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::TokenPair;
use std::sync::{Mutex, PoisonError, RwLock};

/// Holder for the one active token pair.
///
/// Readers snapshot the pair under a read lock and `replace` swaps it
/// wholesale, so an in-flight request uses either the old pair or the new
/// one entirely, never an old access token with a new refresh token.
/// Ordinary requests run in parallel; only rotation is serialized.
pub struct TokenStore {
    current: RwLock<TokenPair>,
    refresh_gate: Mutex<()>,
}

impl TokenStore {
    pub fn new(pair: TokenPair) -> TokenStore {
        TokenStore {
            current: RwLock::new(pair),
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn access_token(&self) -> String {
        self.snapshot().access_token
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.snapshot().refresh_token
    }

    pub fn snapshot(&self) -> TokenPair {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The only mutator: installs a new pair in one step.
    pub fn replace(&self, pair: TokenPair) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = pair;
    }

    /// Runs `refresh` on the current pair while holding the refresh gate,
    /// then installs the result. A second rotation arriving mid-flight
    /// blocks until the first completes; a failed refresh leaves the old
    /// pair in place.
    pub fn rotate<F>(&self, refresh: F) -> Result<TokenPair>
    where
        F: FnOnce(&TokenPair) -> Result<TokenPair>,
    {
        let _gate = self
            .refresh_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot();
        let fresh = refresh(&current)?;
        self.replace(fresh.clone());
        Ok(fresh)
    }
}
