//! Blocking HTTP GET via curl's Easy interface.
//!
//! The body streams through `write_function` into a [`PartFile`]; local
//! write failures abort the transfer and are reported as filesystem errors
//! rather than transport errors.

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use super::storage::PartFile;
use crate::error::PrepError;

/// Redirect hop limit for a single GET.
const MAX_REDIRECTS: u32 = 10;

/// Timeouts for a blocking transfer.
#[derive(Debug, Clone, Copy)]
pub struct HttpOptions {
    /// Time allowed for the TCP/TLS connect phase.
    pub connect_timeout: Duration,
    /// Overall transfer deadline. `None` waits indefinitely.
    pub transfer_timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        HttpOptions {
            connect_timeout: Duration::from_secs(30),
            transfer_timeout: None,
        }
    }
}

/// Streams `url` into `part`, returning the number of bytes written.
pub(crate) fn get_to_part(
    url: &str,
    part: &mut PartFile,
    opts: &HttpOptions,
) -> Result<u64, PrepError> {
    let transport = |e: curl::Error| PrepError::Transport {
        url: url.to_string(),
        source: e,
    };
    let temp_path = part.temp_path().to_path_buf();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(MAX_REDIRECTS).map_err(transport)?;
    easy.connect_timeout(opts.connect_timeout).map_err(transport)?;
    if let Some(timeout) = opts.transfer_timeout {
        easy.timeout(timeout).map_err(transport)?;
    }

    let write_failure: RefCell<Option<io::Error>> = RefCell::new(None);
    let sink = RefCell::new(part);
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match sink.borrow_mut().append(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    *write_failure.borrow_mut() = Some(e);
                    Ok(0) // abort the transfer
                }
            })
            .map_err(transport)?;
        transfer
            .perform()
            .map_err(|e| match write_failure.borrow_mut().take() {
                Some(io_err) => PrepError::fs(temp_path.clone(), io_err),
                None => transport(e),
            })?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(PrepError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }

    Ok(sink.into_inner().written())
}
