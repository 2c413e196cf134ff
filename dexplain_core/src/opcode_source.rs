use std::time::Duration;
use log::debug;
#[cfg(test)]
use mockall::automock;
use crate::opcode_table::OpcodeTableError;

pub const DEFAULT_OPCODE_TABLE_URL: &str = "http://pallergabor.uw.hu/androidblog/dalvik_opcodes.html";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything able to hand back the HTML document holding the opcode table.
#[cfg_attr(test, automock)]
pub trait OpcodeSource {
    fn fetch_document(&self) -> Result<String, OpcodeTableError>;
}

pub struct HttpOpcodeSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl OpcodeSource for HttpOpcodeSource {
    fn fetch_document(&self) -> Result<String, OpcodeTableError> {
        debug!("sending HTTP request to: {} ...", self.url);

        let response = self.client.get(&self.url)
            .send()
            .map_err(|err| OpcodeTableError::FetchError(format!("could not send request to {}: {}", self.url, err)))?
            .error_for_status()
            .map_err(|err| OpcodeTableError::FetchError(format!("could not receive response from {}: {}", self.url, err)))?;

        let body = response.text()
            .map_err(|err| OpcodeTableError::FetchError(format!("could not read response from {}: {}", self.url, err)))?;

        debug!("received {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}

impl HttpOpcodeSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<HttpOpcodeSource, OpcodeTableError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .or(Err(OpcodeTableError::ConfigurationError("could not build HTTP client".to_string())))?;

        Ok(HttpOpcodeSource { client, url: url.into() })
    }
}
