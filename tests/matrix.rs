use softmax_classifier::Matrix;

#[test]
fn product_of_known_matrices() {
    let a = Matrix::from_data(vec![
        vec![1.0, 2.0],
        vec![3.0, 4.0],
    ]);
    let b = Matrix::from_data(vec![
        vec![5.0, 6.0],
        vec![7.0, 8.0],
    ]);

    let c = a * b;
    assert_eq!(c.data, vec![
        vec![19.0, 22.0],
        vec![43.0, 50.0],
    ]);
}

#[test]
#[should_panic]
fn product_panics_on_mismatched_inner_dimensions() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    let _ = a * b;
}

#[test]
#[should_panic]
fn add_panics_on_mismatched_shapes() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    let _ = a + b;
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Matrix::from_data(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ]);
    let t = m.transpose();

    assert_eq!(t.rows, 3);
    assert_eq!(t.cols, 2);
    assert_eq!(t.data[2][0], 3.0);
    assert_eq!(t.data[0][1], 4.0);
}

#[test]
fn row_max_handles_ties() {
    let m = Matrix::from_data(vec![
        vec![2.0, 7.0, 7.0],
        vec![-3.0, -9.0, -4.0],
    ]);
    assert_eq!(m.row_max(), vec![7.0, -3.0]);
}

#[test]
fn row_sum_sums_each_row() {
    let m = Matrix::from_data(vec![
        vec![1.0, 2.0, 3.0],
        vec![-1.0, 0.5, 0.5],
    ]);
    assert_eq!(m.row_sum(), vec![6.0, 0.0]);
}

#[test]
fn per_row_broadcasts_apply_one_scalar_per_row() {
    let m = Matrix::from_data(vec![
        vec![4.0, 6.0],
        vec![10.0, 20.0],
    ]);

    let shifted = m.sub_per_row(&[1.0, 10.0]);
    assert_eq!(shifted.data, vec![
        vec![3.0, 5.0],
        vec![0.0, 10.0],
    ]);

    let scaled = m.div_per_row(&[2.0, 10.0]);
    assert_eq!(scaled.data, vec![
        vec![2.0, 3.0],
        vec![1.0, 2.0],
    ]);
}

#[test]
fn gather_picks_one_entry_per_row() {
    let m = Matrix::from_data(vec![
        vec![0.1, 0.9],
        vec![0.8, 0.2],
        vec![0.5, 0.5],
    ]);
    assert_eq!(m.gather(&[1, 0, 1]), vec![0.9, 0.8, 0.5]);
}

#[test]
#[should_panic]
fn gather_panics_on_out_of_range_column() {
    let m = Matrix::zeros(2, 3);
    let _ = m.gather(&[0, 3]);
}

#[test]
fn scatter_add_adjusts_one_entry_per_row() {
    let mut m = Matrix::from_data(vec![
        vec![0.25, 0.75],
        vec![0.6, 0.4],
    ]);
    m.scatter_add(&[1, 0], -1.0);

    assert_eq!(m.data, vec![
        vec![0.25, -0.25],
        vec![-0.4, 0.4],
    ]);
}

#[test]
fn sum_of_squares_totals_every_entry() {
    let m = Matrix::from_data(vec![
        vec![1.0, -2.0],
        vec![3.0, 0.0],
    ]);
    assert_eq!(m.sum_of_squares(), 14.0);
}

#[test]
fn map_applies_elementwise() {
    let m = Matrix::from_data(vec![vec![1.0, -2.0, 3.0]]);
    let doubled = m.map(|x| x * 2.0);
    assert_eq!(doubled.data, vec![vec![2.0, -4.0, 6.0]]);
}

#[test]
fn random_entries_are_within_unit_range() {
    let m = Matrix::random(4, 5);
    assert_eq!(m.rows, 4);
    assert_eq!(m.cols, 5);
    assert!(m.data.iter().flatten().all(|&x| (-1.0..=1.0).contains(&x)));
}

#[test]
fn json_round_trip_preserves_shape_and_data() {
    let m = Matrix::from_data(vec![
        vec![1.5, -0.25],
        vec![0.0, 3.75],
    ]);

    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix = serde_json::from_str(&json).unwrap();

    assert_eq!(back.rows, m.rows);
    assert_eq!(back.cols, m.cols);
    assert_eq!(back.data, m.data);
}
