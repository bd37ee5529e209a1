use linal::prelude::*;
use log::{info, warn};

fn rotation_z(angle: f32) -> Matrix3f {
    let (sin, cos) = angle.sin_cos();
    Matrix3f::new(
        Vector3::new(cos, sin, 0.0),
        Vector3::new(-sin, cos, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    )
}

fn main() -> Result<()> {
    env_logger::init();

    let quarter_turn = rotation_z(std::f32::consts::FRAC_PI_2);
    let mut full_turn = Matrix3f::identity();
    for _ in 0..4 {
        full_turn *= quarter_turn;
    }
    info!("four quarter turns: {full_turn:?}");
    if full_turn.approx_eq(&Matrix3f::identity()) {
        info!("four quarter turns compose to the identity");
    } else {
        warn!("four quarter turns drifted away from the identity");
    }

    // Rotation matrices are orthogonal: R * R^T == I.
    let round_trip = quarter_turn * quarter_turn.transposed();
    info!(
        "R * R^T is the identity: {}",
        round_trip.approx_eq(&Matrix3f::identity())
    );

    let stretch = Matrix3f::try_from(&[2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0][..])?;
    let transform = quarter_turn * stretch;
    let point = transform.transform_vec(&Vector3::new(1.0, 1.0, 1.0));
    info!("stretched then rotated point: {point}");
    info!("x lands on -3: {}", float_equal(point.x, -3.0));

    let precise = Matrix3d::identity().scaled(1.0 / 3.0).scaled(3.0);
    info!(
        "double precision scale round trip: {}",
        precise.approx_eq(&Matrix3d::identity())
    );

    Ok(())
}
