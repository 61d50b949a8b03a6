use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(dc_usb)");
    println!("cargo:rustc-check-cfg=cfg(dc_usbhid)");
    println!("cargo:rustc-check-cfg=cfg(dc_irda)");

    println!("cargo:rerun-if-changed=build.rs");

    // Cargo exposes enabled features and the target to build scripts
    let libusb = env::var_os("CARGO_FEATURE_LIBUSB").is_some();
    let hidapi = env::var_os("CARGO_FEATURE_HIDAPI").is_some();
    let irda = env::var_os("CARGO_FEATURE_IRDA").is_some();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if libusb {
        println!("cargo:rustc-cfg=dc_usb");
    }

    // libusb can't claim HID interfaces on macOS, only hidapi can
    if (libusb && target_os != "macos") || hidapi {
        println!("cargo:rustc-cfg=dc_usbhid");
    }

    if irda && matches!(target_os.as_str(), "windows" | "linux") {
        println!("cargo:rustc-cfg=dc_irda");
    }
}
