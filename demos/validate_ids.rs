use sricore::id::*;

fn main() {
    // ── 1. Cédulas ────────────────────────────────────────────────────
    println!("=== Cédula ===");
    for cedula in ["1714045984", "1714045985", "2514045984", "17140459"] {
        match validate_cedula(cedula) {
            Ok(()) => println!("  {cedula}: valid"),
            Err(e) => println!("  {cedula}: {e}"),
        }
    }

    // ── 2. RUC with automatic category detection ──────────────────────
    println!("\n=== RUC ===");
    for ruc in [
        "1714045984001",
        "1791251237001",
        "1760001550001",
        "1771251237001",
        "1714045984000",
    ] {
        let category = match detect_contributor(ruc) {
            Ok(kind) => kind.to_string(),
            Err(_) => "?".into(),
        };
        match validate_ruc(ruc) {
            Ok(()) => println!("  {ruc} ({category}): valid"),
            Err(e) => println!("  {ruc} ({category}): {e}"),
        }
    }

    // ── 3. Fixed-category pipelines report the first failing check ────
    println!("\n=== Fixed category ===");
    let ruc = "1714045984001";
    println!("  natural: {:?}", validate_natural_ruc(ruc));
    println!("  private: {:?}", validate_private_ruc(ruc));
    println!("  public:  {:?}", validate_public_ruc(ruc));
}
