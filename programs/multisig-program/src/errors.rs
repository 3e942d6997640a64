use anchor_lang::prelude::*;

#[error_code]
pub enum MultisigError {
    #[msg("not enough approvals to execute the transaction")]
    NotEnoughApprovals,
    #[msg("transaction has already been executed")]
    TransactionAlreadyExecuted,
    #[msg("threshold must be greater than 0 and less than or equal to owner count")]
    InvalidThreshold,
    #[msg("owners length must be non zero")]
    NoOwnersProvided,
    #[msg("empty instruction")]
    EmptyInstruction,
    #[msg("signer is not an owner of the multisig")]
    NotAuthorized,
    #[msg("too many owners")]
    TooManyOwners,
    #[msg("duplicate owner")]
    DuplicateOwner,
    #[msg("instruction exceeds the maximum stored size")]
    InstructionTooLarge,
    #[msg("instruction could not be decoded")]
    InvalidInstruction,
    #[msg("transaction count overflow")]
    Overflow,
}
