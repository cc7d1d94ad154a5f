use soroban_sdk::{Bytes, BytesN, Env};

/// Hash of `secret ++ tag` committed for one cell during placement.
pub type CellCommitment = BytesN<32>;

/// Per-cell secret chosen by the board owner and kept off-chain until reveal.
pub type CellSecret = BytesN<32>;

/// Tag appended to the secret for an empty cell.
pub const EMPTY_TAG: u8 = 0x00;

/// Tag appended to the secret for a ship cell.
pub const SHIP_TAG: u8 = 0x01;

/// Stateless check of revealed cell secrets against stored commitments.
pub struct CommitmentVerifier;

impl CommitmentVerifier {
    /// Computes `sha256(secret ++ tag)` for the given cell value.
    pub fn commit(env: &Env, secret: &CellSecret, is_ship: bool) -> CellCommitment {
        let mut payload = Bytes::from_array(env, &secret.to_array());
        payload.push_back(if is_ship { SHIP_TAG } else { EMPTY_TAG });
        env.crypto().sha256(&payload).into()
    }

    /// True iff `secret` opens `commitment` to `is_ship`.
    pub fn verify(
        env: &Env,
        commitment: &CellCommitment,
        secret: &CellSecret,
        is_ship: bool,
    ) -> bool {
        Self::commit(env, secret, is_ship) == *commitment
    }

    /// Returns the committed bit, or `None` when the secret opens neither value.
    pub fn open(env: &Env, commitment: &CellCommitment, secret: &CellSecret) -> Option<bool> {
        if Self::verify(env, commitment, secret, false) {
            Some(false)
        } else if Self::verify(env, commitment, secret, true) {
            Some(true)
        } else {
            None
        }
    }
}
