//! Difficulty regime selector
//!
//! Dispatches a candidate block to the retarget algorithm that governs its
//! height. Past the V2 activation height every block goes to Digishield,
//! whatever the configured default regime says.

use consensus_core::{BlockEntry, ChainIndex, ConsensusError, Header, Params, RetargetRegime};

use super::{next_work_required_v1, next_work_required_v2};

/// Required compact target for the candidate following `last`.
///
/// `last == None` is the genesis case: with no prior block the chain mines
/// at the network ceiling.
pub fn next_work_required(
    chain: &ChainIndex,
    last: Option<&BlockEntry>,
    candidate: &Header,
    params: &Params,
) -> Result<u32, ConsensusError> {
    let Some(last) = last else {
        return Ok(params.pow_limit_bits);
    };

    let regime = if last.height + 1 >= params.regime_v2_height {
        RetargetRegime::Digishield
    } else {
        params.default_regime
    };

    match regime {
        RetargetRegime::Legacy => next_work_required_v1(chain, last, candidate, params),
        RetargetRegime::Digishield => next_work_required_v2(chain, last, candidate, params),
    }
}
