use sricore::sri::xml::{from_xml_element, to_xml_element};
use sricore::sri::*;

fn main() -> Result<(), SriError> {
    let xml = "<claveAcceso>2002202001179125123700120010010058149171234567817</claveAcceso>";
    let ak: AccessKey = from_xml_element(xml)?;
    println!("ruc from XML: {}", ak.ruc);
    println!("{}", to_xml_element("claveAcceso", &ak)?);

    let flag: SriBool = from_xml_element("<obligadoContabilidad>SI</obligadoContabilidad>")?;
    println!("obligado contabilidad: {}", bool::from(flag));
    println!("{}", to_xml_element("fechaEmision", &VoucherDate::today())?);

    if let Err(e) = from_xml_element::<SriBool>("<obligadoContabilidad>YES</obligadoContabilidad>") {
        println!("rejected: {e}");
    }
    Ok(())
}
