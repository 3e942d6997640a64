use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;

use crate::errors::MultisigError;
use crate::state::MAX_INSTRUCTION_LEN;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionAccount {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Instruction stored in a proposal, borsh encoded, and invoked on execution.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionInstruction {
    pub program_id: Pubkey,
    pub accounts: Vec<TransactionAccount>,
    pub data: Vec<u8>,
}

impl TransactionInstruction {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        require!(!bytes.is_empty(), MultisigError::EmptyInstruction);
        require!(
            bytes.len() <= MAX_INSTRUCTION_LEN,
            MultisigError::InstructionTooLarge
        );

        // try_from_slice also rejects trailing bytes
        Self::try_from_slice(bytes).map_err(|_| error!(MultisigError::InvalidInstruction))
    }

    pub fn to_instruction(&self, multisig_signer: &Pubkey) -> Instruction {
        let accounts: Vec<AccountMeta> = self
            .accounts
            .iter()
            .map(|acc| AccountMeta {
                pubkey: acc.pubkey,
                is_signer: acc.is_signer || acc.pubkey == *multisig_signer,
                is_writable: acc.is_writable,
            })
            .collect();

        Instruction {
            program_id: self.program_id,
            accounts,
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(ix: &TransactionInstruction) -> Vec<u8> {
        let mut buf = Vec::new();
        ix.serialize(&mut buf).unwrap();
        buf
    }

    fn transfer_like(signer: Pubkey) -> TransactionInstruction {
        TransactionInstruction {
            program_id: Pubkey::new_unique(),
            accounts: vec![
                TransactionAccount {
                    pubkey: signer,
                    is_signer: false,
                    is_writable: true,
                },
                TransactionAccount {
                    pubkey: Pubkey::new_unique(),
                    is_signer: false,
                    is_writable: true,
                },
            ],
            data: vec![2, 0, 0, 0, 64, 66, 15, 0, 0, 0, 0, 0],
        }
    }

    #[test]
    fn decode_reads_encoded_instruction() {
        let ix = transfer_like(Pubkey::new_unique());
        assert_eq!(TransactionInstruction::decode(&encode(&ix)).unwrap(), ix);
    }

    #[test]
    fn decode_rejects_empty() {
        assert_eq!(
            TransactionInstruction::decode(&[]).unwrap_err(),
            MultisigError::EmptyInstruction.into()
        );
    }

    #[test]
    fn decode_rejects_oversized() {
        let ix = TransactionInstruction {
            program_id: Pubkey::new_unique(),
            accounts: Vec::new(),
            data: vec![0; MAX_INSTRUCTION_LEN],
        };
        assert_eq!(
            TransactionInstruction::decode(&encode(&ix)).unwrap_err(),
            MultisigError::InstructionTooLarge.into()
        );
    }

    #[test]
    fn decode_rejects_garbage_and_trailing_bytes() {
        assert_eq!(
            TransactionInstruction::decode(&[1, 2, 3]).unwrap_err(),
            MultisigError::InvalidInstruction.into()
        );

        let mut bytes = encode(&transfer_like(Pubkey::new_unique()));
        bytes.push(0);
        assert_eq!(
            TransactionInstruction::decode(&bytes).unwrap_err(),
            MultisigError::InvalidInstruction.into()
        );
    }

    #[test]
    fn multisig_signer_is_marked_signer() {
        let signer = Pubkey::new_unique();
        let ix = transfer_like(signer).to_instruction(&signer);

        assert!(ix.accounts[0].is_signer);
        assert!(!ix.accounts[1].is_signer);
        assert!(ix.accounts.iter().all(|meta| meta.is_writable));
        assert_eq!(ix.data, vec![2, 0, 0, 0, 64, 66, 15, 0, 0, 0, 0, 0]);
    }
}
