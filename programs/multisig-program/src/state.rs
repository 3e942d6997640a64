use anchor_lang::prelude::*;

use crate::errors::MultisigError;

pub const MAX_OWNERS: usize = 10;
pub const MAX_INSTRUCTION_LEN: usize = 1024;
pub const MULTISIG_SIGNER_SEED: &[u8] = b"multisig-signer";

#[account]
pub struct Multisig {
    pub owners: Vec<Pubkey>,
    pub threshold: u64,
    pub transaction_count: u64,
    pub signer_bump: u8, // bump of the PDA that signs executed instructions
}

impl Multisig {
    pub const LEN: usize = 8 + // discriminator
        4 + (32 * MAX_OWNERS) + // owners vec
        8 + // threshold
        8 + // transaction_count
        1; // signer_bump

    pub fn validate(owners: &[Pubkey], threshold: u64) -> Result<()> {
        require!(!owners.is_empty(), MultisigError::NoOwnersProvided);
        require!(owners.len() <= MAX_OWNERS, MultisigError::TooManyOwners);
        require!(
            threshold > 0 && threshold <= owners.len() as u64,
            MultisigError::InvalidThreshold
        );

        for (i, owner) in owners.iter().enumerate() {
            require!(
                !owners[..i].contains(owner),
                MultisigError::DuplicateOwner
            );
        }

        Ok(())
    }

    /// Counts a new proposal and returns the updated total.
    pub fn record_transaction(&mut self) -> Result<u64> {
        self.transaction_count = self
            .transaction_count
            .checked_add(1)
            .ok_or(MultisigError::Overflow)?;

        Ok(self.transaction_count)
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owners.contains(key)
    }

    /// Address and bump of the PDA that signs on behalf of `multisig`.
    pub fn signer_address(multisig: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[MULTISIG_SIGNER_SEED, multisig.as_ref()], program_id)
    }
}

#[account]
pub struct Transaction {
    pub multisig: Pubkey,
    pub creator: Pubkey,
    pub instruction: Vec<u8>,
    pub approved_by: Vec<Pubkey>,
    pub executed: bool,
}

impl Transaction {
    pub const LEN: usize = 8 + // discriminator
        32 + // multisig
        32 + // creator
        4 + MAX_INSTRUCTION_LEN + // instruction vec
        4 + (32 * MAX_OWNERS) + // approved_by vec
        1; // executed

    /// Records an approval from `signer`. Returns false if it was already recorded.
    pub fn approve(&mut self, multisig: &Multisig, signer: Pubkey) -> Result<bool> {
        require!(!self.executed, MultisigError::TransactionAlreadyExecuted);
        require!(multisig.is_owner(&signer), MultisigError::NotAuthorized);

        if self.approved_by.contains(&signer) {
            return Ok(false);
        }
        self.approved_by.push(signer);

        Ok(true)
    }

    pub fn approvals(&self, multisig: &Multisig) -> u64 {
        self.approved_by
            .iter()
            .filter(|key| multisig.is_owner(key))
            .count() as u64
    }

    pub fn check_executable(&self, multisig: &Multisig) -> Result<()> {
        require!(!self.executed, MultisigError::TransactionAlreadyExecuted);
        require_gte!(
            self.approvals(multisig),
            multisig.threshold,
            MultisigError::NotEnoughApprovals
        );

        Ok(())
    }
}
