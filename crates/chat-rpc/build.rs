use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    // Use the bundled protoc so builds don't depend on a system install.
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    let well_known = protoc_bin_vendored::include_path()?;
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    println!("cargo:rerun-if-changed=proto");

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("chat_descriptor.bin"))
        .compile_protos(
            &[
                PathBuf::from("proto/user_v1.proto"),
                PathBuf::from("proto/chat_v1.proto"),
            ],
            &[PathBuf::from("proto"), well_known],
        )?;

    Ok(())
}
