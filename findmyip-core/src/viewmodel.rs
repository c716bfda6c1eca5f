use log::debug;

use crate::{IpInfo, service::NetworkService};

/// Message published when a fetch returns a record whose IP version is not
/// recognized.
pub const DEPRECATED_IP_VERSION_MESSAGE: &str = "Deprecated IP version";

/// Presentation state for one IP lookup, mediating between the network service
/// and whatever renders the result.
///
/// Exactly one of `ip_info` / `error_message` is populated after a completed
/// fetch; both start empty. Completion of the `fetch_ip_info` future is the
/// "done" signal: once the await returns, the state is settled and safe to
/// render. The exclusive borrow taken for the duration of a fetch also means
/// two fetches on the same view model cannot overlap.
#[derive(Debug)]
pub struct IpInfoViewModel {
    service: Box<dyn NetworkService>,
    ip_info: Option<IpInfo>,
    error_message: Option<String>,
}

impl IpInfoViewModel {
    pub fn new(service: Box<dyn NetworkService>) -> Self {
        Self {
            service,
            ip_info: None,
            error_message: None,
        }
    }

    /// The last successfully fetched and validated record, if any.
    pub fn ip_info(&self) -> Option<&IpInfo> {
        self.ip_info.as_ref()
    }

    /// The display-ready message for the last failed or rejected fetch, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Run one fetch cycle: reset both fields, invoke the service once, then
    /// publish either the validated record or an error message.
    pub async fn fetch_ip_info(&mut self) {
        self.ip_info = None;
        self.error_message = None;

        match self.service.fetch_ip_info().await {
            Ok(info) if info.has_recognized_version() => {
                debug!("fetched IP info for {}", info.ip);
                self.ip_info = Some(info);
            }
            Ok(info) => {
                debug!("rejecting record with IP version {:?}", info.version);
                self.error_message = Some(DEPRECATED_IP_VERSION_MESSAGE.to_string());
            }
            Err(err) => {
                debug!("fetch failed: {err}");
                self.error_message = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkError;
    use async_trait::async_trait;

    /// Scripted stand-in for the HTTP-backed service.
    #[derive(Debug)]
    struct MockNetworkService {
        result: Result<IpInfo, NetworkError>,
    }

    impl MockNetworkService {
        fn ok(info: IpInfo) -> Box<Self> {
            Box::new(Self { result: Ok(info) })
        }

        fn err(error: NetworkError) -> Box<Self> {
            Box::new(Self { result: Err(error) })
        }
    }

    #[async_trait]
    impl NetworkService for MockNetworkService {
        async fn fetch_ip_info(&self) -> Result<IpInfo, NetworkError> {
            self.result.clone()
        }
    }

    fn mock_ip_info(version: &str) -> IpInfo {
        IpInfo {
            ip: "1.1.1.1".to_string(),
            network: "Test Network".to_string(),
            version: version.to_string(),
            city: "Test City".to_string(),
            region: "Test Region".to_string(),
            region_code: "TR".to_string(),
            country: "TC".to_string(),
            country_name: "Test Country".to_string(),
            country_code: "TC".to_string(),
            country_code_iso3: "TST".to_string(),
            country_capital: "Test Capital".to_string(),
            country_tld: ".test".to_string(),
            continent_code: "TT".to_string(),
            in_eu: false,
            postal: "12345".to_string(),
            latitude: 1.2345,
            longitude: 5.6789,
            timezone: "Test/Timezone".to_string(),
            utc_offset: "+0000".to_string(),
            country_calling_code: "+99".to_string(),
            currency: "TTD".to_string(),
            currency_name: "Test Dollar".to_string(),
            languages: "en,test".to_string(),
            country_area: 123456.0,
            country_population: 123456789,
            asn: "AS1234".to_string(),
            org: "Test Org".to_string(),
        }
    }

    #[tokio::test]
    async fn success_publishes_record_and_no_error() {
        let info = mock_ip_info("IPv4");
        let mut vm = IpInfoViewModel::new(MockNetworkService::ok(info.clone()));

        vm.fetch_ip_info().await;

        assert_eq!(vm.ip_info(), Some(&info));
        assert_eq!(vm.error_message(), None);
    }

    #[tokio::test]
    async fn ipv6_record_is_accepted() {
        let mut vm = IpInfoViewModel::new(MockNetworkService::ok(mock_ip_info("IPv6")));

        vm.fetch_ip_info().await;

        assert!(vm.ip_info().is_some());
        assert_eq!(vm.error_message(), None);
    }

    #[tokio::test]
    async fn deprecated_version_publishes_error_only() {
        let mut vm = IpInfoViewModel::new(MockNetworkService::ok(mock_ip_info("IPv3")));

        vm.fetch_ip_info().await;

        assert_eq!(vm.ip_info(), None);
        assert_eq!(vm.error_message(), Some(DEPRECATED_IP_VERSION_MESSAGE));
    }

    #[tokio::test]
    async fn classified_errors_surface_their_messages() {
        let cases = [
            (NetworkError::Network, "Network error"),
            (NetworkError::Timeout, "Network Timeout"),
            (NetworkError::Server, "Server error"),
        ];

        for (error, expected) in cases {
            let mut vm = IpInfoViewModel::new(MockNetworkService::err(error));

            vm.fetch_ip_info().await;

            assert_eq!(vm.ip_info(), None);
            assert_eq!(vm.error_message(), Some(expected));
        }
    }

    #[tokio::test]
    async fn wrapped_error_surfaces_its_description() {
        let error = NetworkError::other("transport", 0, "connection refused");
        let mut vm = IpInfoViewModel::new(MockNetworkService::err(error));

        vm.fetch_ip_info().await;

        assert_eq!(vm.error_message(), Some("connection refused"));
    }

    #[tokio::test]
    async fn repeated_successful_fetches_are_idempotent() {
        let info = mock_ip_info("IPv4");
        let mut vm = IpInfoViewModel::new(MockNetworkService::ok(info.clone()));

        vm.fetch_ip_info().await;
        let first = vm.ip_info().cloned();

        vm.fetch_ip_info().await;

        assert_eq!(vm.ip_info().cloned(), first);
        assert_eq!(vm.ip_info(), Some(&info));
    }

    #[tokio::test]
    async fn fetch_after_failure_clears_stale_error() {
        let info = mock_ip_info("IPv4");
        let mut vm = IpInfoViewModel::new(MockNetworkService::err(NetworkError::Server));

        vm.fetch_ip_info().await;
        assert_eq!(vm.error_message(), Some("Server error"));

        vm.service = MockNetworkService::ok(info.clone());
        vm.fetch_ip_info().await;

        assert_eq!(vm.ip_info(), Some(&info));
        assert_eq!(vm.error_message(), None);
    }
}
