use std::io::Result;

fn main() -> Result<()> {
    // The schema is owned by the client crate
    let proto_files = &["../reqresp-core/proto/script.proto"];
    let proto_folder = "../reqresp-core/proto";

    tonic_prost_build::configure()
        .build_client(false)
        .compile_protos(proto_files, &[proto_folder])?;

    println!("cargo:rerun-if-changed=../reqresp-core/proto/script.proto");

    Ok(())
}
