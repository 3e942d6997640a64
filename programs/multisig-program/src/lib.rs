use anchor_lang::prelude::*;
use anchor_lang::solana_program;
use anchor_lang::AccountsExit;

pub mod errors;
pub mod execution;
pub mod state;

use execution::TransactionInstruction;
use state::{Multisig, Transaction, MULTISIG_SIGNER_SEED};

declare_id!("9tX4QfdBjXLUXiV1htgqcLedzygnm87zh58DWENv59f1");

#[program]
pub mod multisig_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        msg!("Greetings from: {:?}", ctx.program_id);
        Ok(())
    }

    pub fn create_multisig(
        ctx: Context<CreateMultisig>,
        owners: Vec<Pubkey>,
        threshold: u64,
    ) -> Result<()> {
        Multisig::validate(&owners, threshold)?;

        let (_, bump) = Multisig::signer_address(&ctx.accounts.multisig.key(), ctx.program_id);

        msg!("creating multisig: {} owners, threshold {}", owners.len(), threshold);

        let multisig = &mut ctx.accounts.multisig;
        multisig.owners = owners;
        multisig.threshold = threshold;
        multisig.transaction_count = 0;
        multisig.signer_bump = bump;

        Ok(())
    }

    pub fn create_transaction(ctx: Context<CreateTransaction>, instruction: Vec<u8>) -> Result<()> {
        // reject anything execute would fail to decode
        let ix = TransactionInstruction::decode(&instruction)?;

        let multisig = &mut ctx.accounts.multisig;
        let count = multisig.record_transaction()?;

        let tx = &mut ctx.accounts.transaction;
        tx.multisig = multisig.key();
        tx.creator = ctx.accounts.creator.key();
        tx.instruction = instruction;
        tx.approved_by = Vec::new();
        tx.executed = false;

        msg!(
            "proposed transaction {} targeting {}",
            count,
            ix.program_id
        );

        Ok(())
    }

    pub fn approve_transaction(ctx: Context<ApproveTransaction>) -> Result<()> {
        let signer = ctx.accounts.signer.key();

        if ctx
            .accounts
            .transaction
            .approve(&ctx.accounts.multisig, signer)?
        {
            msg!("approved by {}", signer);
        } else {
            msg!("already approved by {}", signer);
        }

        Ok(())
    }

    pub fn execute_transaction(ctx: Context<ExecuteTransaction>) -> Result<()> {
        let multisig = &ctx.accounts.multisig;
        let tx = &mut ctx.accounts.transaction;

        tx.check_executable(multisig)?;
        tx.executed = true;
        // persist the flag so a re-entrant call sees it
        tx.exit(ctx.program_id)?;

        let ix = TransactionInstruction::decode(&tx.instruction)?
            .to_instruction(&ctx.accounts.multisig_signer.key());

        let multisig_key = multisig.key();
        let multisig_seeds = &[
            MULTISIG_SIGNER_SEED,
            multisig_key.as_ref(),
            &[multisig.signer_bump],
        ];
        let signer = &[&multisig_seeds[..]];

        msg!("executing {}", ix.program_id);
        solana_program::program::invoke_signed(&ix, ctx.remaining_accounts, signer)?;

        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize {}

#[derive(Accounts)]
pub struct CreateMultisig<'info> {
    #[account(
        init,
        payer = creator,
        space = Multisig::LEN
    )]
    pub multisig: Account<'info, Multisig>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CreateTransaction<'info> {
    #[account(mut)]
    pub multisig: Account<'info, Multisig>,

    #[account(
        init,
        payer = creator,
        space = Transaction::LEN
    )]
    pub transaction: Account<'info, Transaction>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ApproveTransaction<'info> {
    pub multisig: Account<'info, Multisig>,

    #[account(mut, has_one = multisig)]
    pub transaction: Account<'info, Transaction>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct ExecuteTransaction<'info> {
    pub multisig: Account<'info, Multisig>,

    #[account(mut, has_one = multisig)]
    pub transaction: Account<'info, Transaction>,

    /// CHECK: PDA that signs the executed instruction, never read
    #[account(
        seeds = [MULTISIG_SIGNER_SEED, multisig.key().as_ref()],
        bump = multisig.signer_bump,
    )]
    pub multisig_signer: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}
