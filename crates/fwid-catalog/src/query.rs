//! Diagnostic query requests
//!
//! Describes which ECUs each firmware query targets. The transport that sends
//! these requests lives outside this crate; the whitelists are also what the
//! catalog validator checks CAN FD entries against.

use std::collections::BTreeSet;

use fwid_core::{EcuIdentifier, SUPPLIER_PREFIX};
use serde::Serialize;

use crate::fw_versions::{
    ABS, ADAS, CORNER_RADAR, ENGINE, EPS, FWD_CAMERA, FWD_RADAR, HVAC, TRANSMISSION,
};

/// UDS ReadDataByIdentifier
pub const READ_DATA_BY_IDENTIFIER: u8 = 0x22;
/// Positive response SID for ReadDataByIdentifier
pub const READ_DATA_BY_IDENTIFIER_RESPONSE: u8 = 0x62;
/// Vehicle manufacturer spare part number
pub const DID_SPARE_PART_NUMBER: u16 = 0xf187;
/// Application software identification
pub const DID_APPLICATION_SOFTWARE: u16 = 0xf181;
/// Supplier firmware version, echoed as the `\xf1\x00` prefix
pub const DID_FIRMWARE_VERSION: u16 = u16::from_be_bytes(SUPPLIER_PREFIX);

/// One firmware query as sent by the query layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    /// Request frames, sent in order
    pub request: Vec<Vec<u8>>,
    /// Expected positive response prefixes, one per request frame
    pub response: Vec<Vec<u8>>,
    /// ECUs this request may be answered by
    pub whitelist: BTreeSet<EcuIdentifier>,
    /// Bus the request is sent on
    pub bus: u8,
    /// Only relevant to CAN FD platforms
    pub auxiliary: bool,
    /// Whether the panda must switch the OBD port to the diagnostic bus
    pub obd_multiplexing: bool,
}

impl QueryRequest {
    pub fn new(
        request: Vec<Vec<u8>>,
        response: Vec<Vec<u8>>,
        whitelist: impl IntoIterator<Item = EcuIdentifier>,
    ) -> Self {
        Self {
            request,
            response,
            whitelist: whitelist.into_iter().collect(),
            bus: 0,
            auxiliary: false,
            obd_multiplexing: true,
        }
    }

    pub fn on_bus(mut self, bus: u8) -> Self {
        self.bus = bus;
        self
    }

    /// Mark as an auxiliary (CAN FD only) request
    pub fn auxiliary(mut self) -> Self {
        self.auxiliary = true;
        self
    }

    pub fn without_obd_multiplexing(mut self) -> Self {
        self.obd_multiplexing = false;
        self
    }

    /// Whether `ecu` may answer this request
    pub fn allows(&self, ecu: &EcuIdentifier) -> bool {
        self.whitelist.contains(ecu)
    }
}

/// Read of the supplier firmware version DID
pub fn version_request() -> Vec<u8> {
    did_request(&[DID_FIRMWARE_VERSION])
}

/// Read of part number, software id and firmware version in one frame
pub fn version_request_multi() -> Vec<u8> {
    did_request(&[
        DID_SPARE_PART_NUMBER,
        DID_APPLICATION_SOFTWARE,
        DID_FIRMWARE_VERSION,
    ])
}

/// Positive response prefix for the firmware version DID
pub fn version_response() -> Vec<u8> {
    let mut response = vec![READ_DATA_BY_IDENTIFIER_RESPONSE];
    response.extend_from_slice(&DID_FIRMWARE_VERSION.to_be_bytes());
    response
}

fn did_request(dids: &[u16]) -> Vec<u8> {
    let mut request = vec![READ_DATA_BY_IDENTIFIER];
    for did in dids {
        request.extend_from_slice(&did.to_be_bytes());
    }
    request
}

/// All firmware query requests, with whitelist unions computed up front
#[derive(Debug, Clone, Serialize)]
pub struct QueryConfig {
    requests: Vec<QueryRequest>,
    auxiliary_whitelist: BTreeSet<EcuIdentifier>,
    base_whitelist: BTreeSet<EcuIdentifier>,
}

impl QueryConfig {
    pub fn new(requests: Vec<QueryRequest>) -> Self {
        let union = |auxiliary: bool| -> BTreeSet<EcuIdentifier> {
            requests
                .iter()
                .filter(|r| r.auxiliary == auxiliary)
                .flat_map(|r| r.whitelist.iter().copied())
                .collect()
        };
        let auxiliary_whitelist = union(true);
        let base_whitelist = union(false);

        Self {
            requests,
            auxiliary_whitelist,
            base_whitelist,
        }
    }

    /// Queries used for Hyundai, Kia and Genesis vehicles
    pub fn builtin() -> Self {
        let long = vec![version_request()];
        let multi = vec![version_request_multi()];
        let response = vec![version_response()];

        Self::new(vec![
            QueryRequest::new(
                long.clone(),
                response.clone(),
                [TRANSMISSION, EPS, ABS, FWD_RADAR, FWD_CAMERA],
            ),
            QueryRequest::new(
                multi,
                response.clone(),
                [ENGINE, TRANSMISSION, EPS, ABS, FWD_RADAR],
            ),
            // CAN FD: camera-side bus and the ADAS driving computer bus
            QueryRequest::new(
                long.clone(),
                response.clone(),
                [FWD_CAMERA, FWD_RADAR, CORNER_RADAR, HVAC],
            )
            .auxiliary(),
            QueryRequest::new(long, response, [FWD_CAMERA, ADAS, CORNER_RADAR, HVAC])
                .on_bus(1)
                .auxiliary()
                .without_obd_multiplexing(),
        ])
    }

    pub fn requests(&self) -> &[QueryRequest] {
        &self.requests
    }

    /// Union of every auxiliary request's whitelist
    pub fn auxiliary_whitelist(&self) -> &BTreeSet<EcuIdentifier> {
        &self.auxiliary_whitelist
    }

    /// Union of every non-auxiliary request's whitelist
    pub fn base_whitelist(&self) -> &BTreeSet<EcuIdentifier> {
        &self.base_whitelist
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_bytes() {
        assert_eq!(version_request(), vec![0x22, 0xf1, 0x00]);
        assert_eq!(
            version_request_multi(),
            vec![0x22, 0xf1, 0x87, 0xf1, 0x81, 0xf1, 0x00]
        );
        assert_eq!(version_response(), vec![0x62, 0xf1, 0x00]);
    }

    #[test]
    fn test_builtin_whitelist_unions() {
        let config = QueryConfig::builtin();
        assert_eq!(config.requests().len(), 4);

        let aux: BTreeSet<_> = [FWD_CAMERA, FWD_RADAR, CORNER_RADAR, HVAC, ADAS]
            .into_iter()
            .collect();
        assert_eq!(config.auxiliary_whitelist(), &aux);

        let base: BTreeSet<_> = [ENGINE, TRANSMISSION, EPS, ABS, FWD_RADAR, FWD_CAMERA]
            .into_iter()
            .collect();
        assert_eq!(config.base_whitelist(), &base);
    }

    #[test]
    fn test_builtin_auxiliary_requests() {
        let config = QueryConfig::builtin();
        let aux: Vec<_> = config.requests().iter().filter(|r| r.auxiliary).collect();
        assert_eq!(aux.len(), 2);
        assert_eq!(aux[0].bus, 0);
        assert!(aux[0].obd_multiplexing);
        assert_eq!(aux[1].bus, 1);
        assert!(!aux[1].obd_multiplexing);
        assert!(aux[1].allows(&ADAS));
        assert!(!aux[0].allows(&ADAS));
    }

    #[test]
    fn test_empty_config() {
        let config = QueryConfig::new(Vec::new());
        assert!(config.auxiliary_whitelist().is_empty());
        assert!(config.base_whitelist().is_empty());
    }
}
