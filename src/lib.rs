use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::JNIEnv;
use std::os::raw::c_void;

mod config {
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}
#[cfg(test)]
mod key_source;
mod obfuscate;
pub mod secrets;

#[macro_use]
extern crate log;

#[cfg(target_os = "android")]
const LOG_TAG: &str = "AntiFraudNative";

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(LOG_TAG)
            .with_max_level(log::LevelFilter::Debug),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {}

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: jni::JavaVM, _reserved: *mut c_void) -> jint {
    init_logging();
    info!("Native library loaded, JNI_OnLoad called");

    match secrets::fingerprint() {
        Some(fp) => info!("API key embedded (sha256 {}...)", fp),
        None => warn!("No API key embedded at build time, requests will be unauthenticated"),
    }

    JNI_VERSION_1_6
}

/// `RetrofitClient.getApiKey()`: the key baked in at build time, or `""`.
#[no_mangle]
pub extern "system" fn Java_com_example_scamdetectorapp_data_remote_RetrofitClient_getApiKey(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    let key = secrets::api_key();
    debug!("getApiKey called, returning {} bytes", key.len());
    string_or_null(env.new_string(key))
}

fn string_or_null(result: Result<JString, jni::errors::Error>) -> jstring {
    match result {
        Ok(key) => key.into_raw(),
        Err(e) => {
            // A pending OutOfMemoryError is left for the caller to observe.
            error!("Failed to create API key string: {:?}", e);
            JObject::null().into_raw()
        }
    }
}
