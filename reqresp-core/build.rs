use std::io::Result;

fn main() -> Result<()> {
    // The server side lives in `reqresp-service`, this crate only needs the client stubs.
    let proto_files = &["proto/script.proto"];
    let proto_folder = "proto";

    tonic_prost_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(proto_files, &[proto_folder])?;

    println!("cargo:rerun-if-changed=proto/script.proto");

    Ok(())
}
