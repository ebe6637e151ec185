use futures::{Stream, StreamExt};
use std::marker::PhantomData;

use super::error::ErrorPolicy;
use crate::domain::{AmountType, Instruction};
use crate::engine::LedgerProcessor;
use crate::io::IoError;
use crate::storage::AccountStore;

/// Single stream processing session
pub struct ProcessingSession<A, S, P>
where
    A: AmountType,
    S: AccountStore<A>,
    P: ErrorPolicy,
{
    processor: LedgerProcessor<A, S>,
    error_policy: P,
    _phantom: PhantomData<A>,
}

impl<A, S, P> ProcessingSession<A, S, P>
where
    A: AmountType,
    S: AccountStore<A>,
    P: ErrorPolicy,
{
    /// Create a new processing session
    pub fn new(processor: LedgerProcessor<A, S>, error_policy: P) -> Self {
        Self {
            processor,
            error_policy,
            _phantom: PhantomData,
        }
    }

    /// Process a stream of instructions
    /// Returns true if all instructions were processed successfully (or skipped per policy)
    /// Returns false if processing was aborted due to error policy
    pub async fn process_stream<St>(&mut self, mut stream: St) -> bool
    where
        St: Stream<Item = Result<Instruction<A>, IoError>> + Unpin,
    {
        while let Some(result) = stream.next().await {
            match result {
                Ok(instruction) => {
                    if let Err(e) = self.processor.process(instruction)
                        && !self.error_policy.handle_engine_error(e)
                    {
                        return false;
                    }
                }
                Err(e) => {
                    if !self.error_policy.handle_io_error(e) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &S {
        self.processor.store()
    }

    /// Consume the session and return the processor
    pub fn into_processor(self) -> LedgerProcessor<A, S> {
        self.processor
    }
}
