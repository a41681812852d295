// Walks through the co-Z building blocks on NIST P-256 and then runs the
// full ladder on a fixed scalar.

use cozec_algorithms::ec::{scalar_multiply, Curve, Field, JacobianPoint, Scalar};
use cozec_algorithms::Error;
use cozec_params::curves::NIST_P256;

fn print_point(label: &str, point: &JacobianPoint<'_>) -> Result<(), Error> {
    let affine = point.to_affine()?;
    match (affine.x(), affine.y()) {
        (Some(x), Some(y)) => {
            println!("{label}:");
            println!("  x = {}", hex::encode(x.to_be_bytes()));
            println!("  y = {}", hex::encode(y.to_be_bytes()));
        }
        _ => println!("{label}: point at infinity"),
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    let field = Field::from_params(&NIST_P256)?;
    let curve = Curve::from_params(&field, &NIST_P256)?;
    let g = JacobianPoint::from_affine(&curve.generator(&NIST_P256)?);

    // DBLU and TPLU keep the input point co-Z with their result
    let (doubled, _) = g.dblu()?;
    print_point("2G (DBLU)", &doubled)?;
    let (tripled, base) = g.tplu()?;
    print_point("3G (TPLU)", &tripled)?;
    println!("  co-Z with rescaled G: {}", bool::from(tripled.is_co_z(&base)));

    // One ladder step by hand: 2·3G + G
    let (seven, _) = tripled.zdau(&base)?;
    print_point("7G (ZDAU)", &seven)?;

    let k_bytes = hex::decode("c51e4753afdec1e6b6c6a5b992f43f8dd0c7a8933072708b6522468b2ffb06fd")
        .map_err(|_| Error::param("k", "not a valid hex string"))?;
    let k = Scalar::from_be_slice(&k_bytes)?;
    print_point("k·G (ladder)", &scalar_multiply(&k, &g)?)?;
    print_point("0·G (ladder)", &scalar_multiply(&Scalar::from_u64(0), &g)?)?;

    Ok(())
}
