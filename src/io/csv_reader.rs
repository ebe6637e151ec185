use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawInstructionRecord;
use crate::domain::{AmountType, Instruction};

/// Async stream of instructions from CSV input
pub struct CsvInstructionStream<A>
where
    A: AmountType + Unpin,
{
    inner: Pin<Box<dyn Stream<Item = Result<Instruction<A>, IoError>> + Send>>,
}

impl<A> CsvInstructionStream<A>
where
    A: AmountType + Unpin + 'static,
{
    /// Create a new instruction stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawInstructionRecord>()
            .map(|result| {
                result
                    .map_err(IoError::from)
                    .and_then(|raw| raw.parse::<A>())
            });

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new instruction stream from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let stream = CsvInstructionStream::<Amount>::from_file("instructions.csv").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl<A> Stream for CsvInstructionStream<A>
where
    A: AmountType + Unpin,
{
    type Item = Result<Instruction<A>, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
