//! Intermediate token selection
//!
//! When a provider cannot bridge the sell token directly, the swap leg
//! first converts it into one of the provider's candidate settlement
//! tokens. This module ranks those candidates and picks the one the
//! pipeline should settle through.

use std::collections::HashSet;

use tracing::{debug, warn};

use bridge_types::{CorrelatedTokens, ProviderQuoteError, TokenInfo};

use crate::token_priority::{
	is_correlated_token, is_native_or_wrapped_native, is_native_token,
	is_stablecoin_priority_token, TokenPriority,
};

/// Pick the best intermediate token out of `candidates`.
///
/// Ranking, highest tier first: same-as-source (so no swap leg is
/// needed), registry stablecoins, correlated hints, the native asset,
/// everything else. Ties keep the provider's original candidate order.
///
/// A native or wrapped-native source never promotes a native/wrapped
/// candidate: that pairing is unsupported downstream.
///
/// Fails with `NoIntermediateTokens` when `candidates` is empty or
/// filtering removed every entry.
pub async fn select_intermediate_token(
	source_chain_id: u64,
	source_token: &str,
	candidates: &[TokenInfo],
	correlated_fetcher: Option<&dyn CorrelatedTokens>,
	allow_intermediate_equals_source: bool,
) -> Result<TokenInfo, ProviderQuoteError> {
	let Some(first) = candidates.first() else {
		return Err(ProviderQuoteError::NoIntermediateTokens);
	};

	// A single candidate is returned as-is, skipping all ranking and
	// filtering
	if candidates.len() == 1 {
		return Ok(first.clone());
	}

	let correlated = resolve_correlated_tokens(source_chain_id, correlated_fetcher).await;

	let filtered: Vec<&TokenInfo> = candidates
		.iter()
		.filter(|candidate| {
			allow_intermediate_equals_source || !candidate.same_address(source_token)
		})
		.collect();

	let source_is_native = is_native_or_wrapped_native(source_chain_id, source_token);

	let mut ranked: Vec<(&TokenInfo, TokenPriority)> = filtered
		.into_iter()
		.map(|candidate| {
			let priority = candidate_priority(
				source_chain_id,
				source_token,
				source_is_native,
				candidate,
				&correlated,
			);
			(candidate, priority)
		})
		.collect();

	// Stable sort: candidates in the same tier keep their original
	// relative order
	ranked.sort_by(|a, b| b.1.cmp(&a.1));

	match ranked.first() {
		Some((token, priority)) => {
			debug!(
				token = token.label(),
				?priority,
				"selected intermediate token"
			);
			Ok((*token).clone())
		},
		None => Err(ProviderQuoteError::NoIntermediateTokens),
	}
}

fn candidate_priority(
	source_chain_id: u64,
	source_token: &str,
	source_is_native: bool,
	candidate: &TokenInfo,
	correlated: &HashSet<String>,
) -> TokenPriority {
	// Settling in the sell token itself skips the swap leg entirely,
	// but a native/wrapped-native pair on both sides is unsupported
	// downstream and must not be promoted
	if candidate.same_address(source_token)
		&& !(source_is_native
			&& is_native_or_wrapped_native(candidate.chain_id, &candidate.address))
	{
		return TokenPriority::SameAsSource;
	}

	if is_stablecoin_priority_token(candidate.chain_id, &candidate.address) {
		return TokenPriority::StablecoinRegistry;
	}

	if is_correlated_token(&candidate.address, correlated) {
		return TokenPriority::Correlated;
	}

	// A native candidate only ranks when the source itself is not
	// native/wrapped-native
	if is_native_token(&candidate.address) && !source_is_native {
		return TokenPriority::NativeAsset;
	}

	TokenPriority::Other
}

/// Fetch and normalize the correlated-token hints; a failing fetcher
/// degrades to an empty set and never aborts selection
async fn resolve_correlated_tokens(
	source_chain_id: u64,
	correlated_fetcher: Option<&dyn CorrelatedTokens>,
) -> HashSet<String> {
	let Some(fetcher) = correlated_fetcher else {
		return HashSet::new();
	};

	match fetcher.correlated_tokens(source_chain_id).await {
		Ok(tokens) => tokens.into_iter().map(|t| t.to_lowercase()).collect(),
		Err(error) => {
			warn!(
				%error,
				chain_id = source_chain_id,
				"failed to fetch correlated tokens, falling back to basic priority"
			);
			HashSet::new()
		},
	}
}
