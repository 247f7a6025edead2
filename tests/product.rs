//! Integration tests for the matrix product and its parallel variant.

use redeem_matrix::{Matrix, MatrixError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_by_three() -> Matrix<i32> {
    Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
}

fn three_by_two() -> Matrix<i32> {
    Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap()
}

// ---------------------------------------------------------------------------
// Sequential product
// ---------------------------------------------------------------------------

#[test]
fn product_of_2x3_and_3x2() {
    init_logger();
    let out = two_by_three().product(&three_by_two()).unwrap();
    assert_eq!(out.shape(), (2, 2));
    assert_eq!(out, Matrix::from_rows(vec![vec![58, 64], vec![139, 154]]).unwrap());
}

#[test]
fn product_result_shape_is_other_width_by_self_height() {
    // 4 columns x 1 row times 3 columns x 4 rows
    let row = Matrix::from_shape_vec((4, 1), vec![1.0, 0.0, -1.0, 2.0]).unwrap();
    let m = Matrix::from_shape_vec((3, 4), (0..12).map(f64::from).collect()).unwrap();
    let out = row.product(&m).unwrap();
    assert_eq!(out.shape(), (3, 1));
    // column x: 1*m(x,0) - m(x,2) + 2*m(x,3)
    assert_eq!(out.to_array(), vec![12.0, 14.0, 16.0]);
}

#[test]
fn product_with_identity_is_unchanged() {
    let a = three_by_two();
    let identity = Matrix::<i32>::new(2, 2)
        .unwrap()
        .map(|_, x, y| if x == y { 1 } else { 0 });
    assert_eq!(a.product(&identity).unwrap(), a);
}

#[test]
fn column_vector_product() {
    let weights = two_by_three();
    let input = Matrix::from_array(&[1, 0, 2]).unwrap();
    let out = weights.product(&input).unwrap();
    assert_eq!(out.shape(), (1, 2));
    assert_eq!(out.to_array(), vec![7, 16]);
}

#[test]
fn product_transpose_identity() {
    // (AB)^T == B^T A^T
    let a = two_by_three();
    let b = three_by_two();
    let left = a.product(&b).unwrap().transpose();
    let right = b.transpose().product(&a.transpose()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn product_rejects_incompatible_shapes() {
    init_logger();
    let a = two_by_three();
    let b = Matrix::<i32>::new(2, 2).unwrap();
    assert_eq!(
        a.product(&b),
        Err(MatrixError::ShapeMismatch {
            op: "product",
            left: (3, 2),
            right: (2, 2)
        })
    );
}

// ---------------------------------------------------------------------------
// Parallel product
// ---------------------------------------------------------------------------

#[test]
fn par_product_matches_product_on_floats() {
    let a = Matrix::from_shape_vec((5, 3), (0..15).map(|v| v as f32 * 0.1 - 0.7).collect()).unwrap();
    let b = Matrix::from_shape_vec((4, 5), (0..20).map(|v| (v % 7) as f32 * 0.3).collect()).unwrap();
    let seq = a.product(&b).unwrap();
    let par = a.par_product(&b).unwrap();
    // same ascending summation order per cell, so results are bit-identical
    assert_eq!(seq, par);
}

#[test]
fn par_product_example_values() {
    let out = two_by_three().par_product(&three_by_two()).unwrap();
    assert_eq!(out.to_array(), vec![58, 64, 139, 154]);
}

#[test]
fn par_map_and_par_fusion() {
    let a = two_by_three();
    assert_eq!(a.par_map(|&v, _, _| v * 2), a.multiply_scalar(2));

    let out: Matrix<i32> =
        Matrix::par_fusion_with_shape(&a, &a, (2, 3), |m, _, x, y| m.get(y, x)).unwrap();
    assert_eq!(out, a.transpose());
}
