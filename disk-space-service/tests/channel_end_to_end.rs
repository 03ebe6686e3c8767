// SPDX-License-Identifier: GPL-3.0-only

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use disk_space_service::{Config, DiskSpacePlugin, MethodChannel, serve};
use disk_space_sys::{FilesystemMetadata, StaticMetadata, UserDirs};
use disk_space_types::{
    CHANNEL_NAME, ChannelValue, GET_FREE_DISK_SPACE, GET_TOTAL_DISK_SPACE, MethodCall,
};

const TOTAL: i64 = 64_000_000_000;
const FREE: i64 = 32_000_000_000;

fn channel_for(metadata: impl FilesystemMetadata + 'static, config: Config) -> MethodChannel {
    let user_dirs = UserDirs {
        home: Some(PathBuf::from("/data/app")),
        documents: Some(PathBuf::from("/data/app/Documents")),
    };
    let plugin = DiskSpacePlugin::new(config.build_query_with(Arc::new(metadata), user_dirs));

    let mut channel = MethodChannel::new(CHANNEL_NAME);
    plugin.register(&mut channel).expect("register plugin");
    channel
}

fn megabytes(channel: &MethodChannel, method: &str) -> f64 {
    channel
        .invoke(&MethodCall::new(method))
        .as_f64()
        .unwrap_or_else(|| panic!("{method} must answer a number"))
}

#[test]
fn total_and_free_answer_their_own_megabytes() {
    let channel = channel_for(StaticMetadata::new(TOTAL, FREE), Config::default());

    let total = megabytes(&channel, GET_TOTAL_DISK_SPACE);
    let free = megabytes(&channel, GET_FREE_DISK_SPACE);

    assert!((total - 61035.15).abs() < 1.0, "total={total}");
    assert!((free - 30517.58).abs() < 1.0, "free={free}");
    assert_eq!(total, 61035.0);
    assert_eq!(free, 30517.0);
}

#[test]
fn responses_are_never_replaced_by_a_version_string() {
    let channel = channel_for(StaticMetadata::new(TOTAL, FREE), Config::default());

    for method in [GET_TOTAL_DISK_SPACE, GET_FREE_DISK_SPACE, "getBatteryLevel"] {
        let value = channel.invoke(&MethodCall::new(method));
        assert!(
            matches!(value, ChannelValue::Double(_)),
            "{method} answered {value:?}"
        );
    }
}

#[test]
fn unrecognized_method_answers_zero_not_a_previous_reading() {
    let channel = channel_for(StaticMetadata::new(TOTAL, FREE), Config::default());

    assert_eq!(megabytes(&channel, GET_TOTAL_DISK_SPACE), 61035.0);
    assert_eq!(megabytes(&channel, "getDiskSpace"), 0.0);
}

#[test]
fn free_space_falls_back_to_legacy_free_size() {
    let channel = channel_for(
        StaticMetadata::new(TOTAL, FREE).without_important_usage(),
        Config::default(),
    );
    assert_eq!(megabytes(&channel, GET_FREE_DISK_SPACE), 30517.0);
}

#[test]
fn unreadable_filesystem_answers_zero() {
    let channel = channel_for(
        StaticMetadata::new(TOTAL, FREE)
            .without_important_usage()
            .deny("/"),
        Config::default(),
    );
    assert_eq!(megabytes(&channel, GET_TOTAL_DISK_SPACE), 0.0);
    assert_eq!(megabytes(&channel, GET_FREE_DISK_SPACE), 0.0);
}

#[test]
fn configured_documents_dir_answers_free_space_when_home_is_unreadable() {
    let config = Config {
        documents_dir: Some(PathBuf::from("/srv/docs")),
        ..Config::default()
    };
    let channel = channel_for(StaticMetadata::new(TOTAL, FREE).deny("/data"), config);

    assert_eq!(megabytes(&channel, GET_TOTAL_DISK_SPACE), 0.0);
    assert_eq!(megabytes(&channel, GET_FREE_DISK_SPACE), 30517.0);
}

#[test]
fn serve_loop_answers_requests_in_order() {
    let channel = channel_for(StaticMetadata::new(TOTAL, FREE), Config::default());
    let input = concat!(
        "{\"method\":\"getTotalDiskSpace\"}\n",
        "{\"method\":\"getFreeDiskSpace\",\"arguments\":null}\n",
        "{\"method\":\"somethingElse\"}\n",
    );
    let mut output = Vec::new();

    let answered = serve(&channel, Cursor::new(input), &mut output).expect("serve");
    assert_eq!(answered, 3);
    assert_eq!(
        String::from_utf8(output).expect("utf8"),
        "61035.0\n30517.0\n0.0\n"
    );
}
