//!  Common functions used in the persistent volume end-to-end tests of
//!  Kubernetes clusters
//!
//! ## Usage
//!
//! Add the dependency to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! volume-test-commons = "0.1.0"
//! ```
//!
//! Then `use` the prelude module in your test files:
//!
//! ```rust
//! use volume_test_commons::test::prelude::*;
//! ```
//!
//! ## Example
//!
//! The [`test::kube::TestVolumeClient`] is used to create volumes, claims
//! and pods and to wait for their state. A
//! [`test::temporary_resource::TemporaryVolumePair`] deletes its volume
//! and claim if it goes out of scope which is also the case if a test
//! case panics.
//!
//! ```no_run
//! use k8s_openapi::api::core::v1::HostPathVolumeSource;
//! use volume_test_commons::test::prelude::*;
//!
//! let client = TestVolumeClient::new();
//!
//! let pv_config = PersistentVolumeConfig::new(PersistentVolumeSource::HostPath(
//!     HostPathVolumeSource {
//!         path: String::from("/tmp/volume"),
//!         type_: None,
//!     },
//! ));
//! let pvc_config = PersistentVolumeClaimConfig::default();
//!
//! let mut pair = TemporaryVolumePair::new(&client, &pv_config, &pvc_config, "default", false);
//! pair.wait_until_bound();
//!
//! assert_that(pair.pv()).is_bound_to(pair.pvc());
//! client.create_wait_and_delete_pod("default", pair.pvc());
//! ```
