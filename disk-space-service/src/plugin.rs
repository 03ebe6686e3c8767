// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use disk_space_sys::{DiskSpaceQuery, platform_version};
use disk_space_types::{
    ChannelValue, GET_FREE_DISK_SPACE, GET_PLATFORM_VERSION, GET_TOTAL_DISK_SPACE,
    GET_USED_DISK_SPACE,
};

use crate::channel::MethodChannel;
use crate::error::Result;

/// Disk space handlers, registered explicitly on a host channel
#[derive(Debug, Clone)]
pub struct DiskSpacePlugin {
    query: Arc<DiskSpaceQuery>,
}

impl DiskSpacePlugin {
    pub fn new(query: DiskSpaceQuery) -> Self {
        Self {
            query: Arc::new(query),
        }
    }

    pub fn query(&self) -> &DiskSpaceQuery {
        &self.query
    }

    /// Install one handler per supported method.
    ///
    /// Each handler answers only its own value; a request never sees another
    /// method's response.
    pub fn register(&self, channel: &mut MethodChannel) -> Result<()> {
        let query = Arc::clone(&self.query);
        channel.register(GET_FREE_DISK_SPACE, move |_| {
            ChannelValue::Double(query.free_capacity_mb())
        })?;

        let query = Arc::clone(&self.query);
        channel.register(GET_TOTAL_DISK_SPACE, move |_| {
            ChannelValue::Double(query.total_capacity_mb())
        })?;

        let query = Arc::clone(&self.query);
        channel.register(GET_USED_DISK_SPACE, move |_| {
            ChannelValue::Double(query.used_capacity_mb())
        })?;

        channel.register(GET_PLATFORM_VERSION, |_| {
            ChannelValue::String(platform_version())
        })?;

        tracing::debug!(
            "Registered disk space handlers on {}: {:?}",
            channel.name(),
            channel.methods()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use disk_space_sys::{DataLocations, StaticMetadata};
    use disk_space_types::{CHANNEL_NAME, MethodCall};

    use super::*;
    use crate::error::ServiceError;

    fn plugin(metadata: StaticMetadata) -> DiskSpacePlugin {
        DiskSpacePlugin::new(DiskSpaceQuery::new(
            Arc::new(metadata),
            DataLocations::new("/data", vec![PathBuf::from("/data/Documents")]),
        ))
    }

    #[test]
    fn registers_every_method() {
        let mut channel = MethodChannel::new(CHANNEL_NAME);
        plugin(StaticMetadata::new(1, 1))
            .register(&mut channel)
            .expect("register plugin");

        assert_eq!(
            channel.methods(),
            vec![
                GET_FREE_DISK_SPACE,
                GET_PLATFORM_VERSION,
                GET_TOTAL_DISK_SPACE,
                GET_USED_DISK_SPACE,
            ]
        );
    }

    #[test]
    fn registering_twice_on_one_channel_fails() {
        let mut channel = MethodChannel::new(CHANNEL_NAME);
        let plugin = plugin(StaticMetadata::new(1, 1));
        plugin.register(&mut channel).expect("first registration");

        let error = plugin
            .register(&mut channel)
            .expect_err("second registration must fail");
        assert!(matches!(error, ServiceError::DuplicateHandler(_)));
    }

    #[test]
    fn used_space_is_reported_in_megabytes() {
        let mut channel = MethodChannel::new(CHANNEL_NAME);
        plugin(StaticMetadata::new(10 * 1024 * 1024, 4 * 1024 * 1024))
            .register(&mut channel)
            .expect("register plugin");

        assert_eq!(
            channel.invoke(&MethodCall::new(GET_USED_DISK_SPACE)),
            ChannelValue::Double(6.0)
        );
    }

    #[test]
    fn platform_version_is_a_string() {
        let mut channel = MethodChannel::new(CHANNEL_NAME);
        plugin(StaticMetadata::new(1, 1))
            .register(&mut channel)
            .expect("register plugin");

        let value = channel.invoke(&MethodCall::new(GET_PLATFORM_VERSION));
        assert!(value.as_str().is_some_and(|v| !v.is_empty()));
    }
}
