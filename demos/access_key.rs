use chrono::NaiveDate;
use sricore::sri::*;

fn main() -> Result<(), SriError> {
    // ── 1. Build and encode ───────────────────────────────────────────
    let date = NaiveDate::from_ymd_opt(2020, 2, 20).ok_or(SriError::AccessKeyDate("20022020".into()))?;
    let ak = AccessKeyBuilder::new(date, VoucherType::Invoice, "1791251237001")
        .environment(Environment::Production)
        .series(1, 1)
        .sequential(5_814_917)
        .code("12345678")
        .build()?;

    let key = ak.generate()?;
    println!("=== Generate ===");
    println!("  base:      {}", ak.base()?);
    println!("  key:       {key}");
    println!("  number:    {}", ak.number());

    // ── 2. Decode ─────────────────────────────────────────────────────
    println!("\n=== Decode ===");
    let decoded: AccessKey = key.parse()?;
    println!("  date:        {}", VoucherDate(decoded.date).encode()?);
    println!("  voucher:     {}", decoded.voucher_type.code());
    println!("  ruc:         {}", decoded.ruc);
    println!("  environment: {}", decoded.environment.code());
    println!("  series:      {}", decoded.series());
    println!("  sequential:  {}", decoded.sequential);
    println!("  code:        {}", decoded.code);

    // ── 3. Random numeric code ────────────────────────────────────────
    println!("\n=== Random code ===");
    let fresh = AccessKeyBuilder::new(date, VoucherType::CreditNote, "1714045984001")
        .sequential(183_747)
        .code(AccessKey::random_code())
        .build()?;
    println!("  {}", fresh.generate()?);

    // ── 4. Errors ─────────────────────────────────────────────────────
    println!("\n=== Errors ===");
    for bad in ["123", "3002202001171404598400120010010001837471234567812"] {
        if let Err(e) = AccessKey::from_key(bad) {
            println!("  {e}");
        }
    }

    Ok(())
}
