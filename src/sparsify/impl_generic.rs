//! Generic tensor implementation of sparsification.
//!
//! Tensors are pulled to host, run through [`sparsify_with`], and the retained
//! samples are uploaded back to the client's device in the input dtype.

use crate::sparsify::error::{SparsifyError, SparsifyResult};
use crate::sparsify::greedy::sparsify_with;
use crate::sparsify::types::{SparsifiedTensors, SparsifyOptions};
use numr::dtype::DType;
use numr::error::Error;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Sparsify a curve held in 1D tensors.
pub fn sparsify_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
    options: &SparsifyOptions,
) -> SparsifyResult<SparsifiedTensors<R>>
where
    R: Runtime<DType = DType>,
    C: RuntimeClient<R>,
{
    validate_curve_1d(x.shape(), "x")?;
    validate_curve_1d(y.shape(), "y")?;

    let dtype = x.dtype();
    if y.dtype() != dtype {
        return Err(SparsifyError::InvalidParameter {
            parameter: "y".to_string(),
            message: format!("dtype {:?} does not match x dtype {:?}", y.dtype(), dtype),
        });
    }

    let x_data = to_host(x)?;
    let y_data = to_host(y)?;
    let out = sparsify_with(&x_data, &y_data, options)?;

    Ok(SparsifiedTensors {
        x: to_device(client, &out.x, dtype)?,
        y: to_device(client, &out.y, dtype)?,
        mask: out.mask,
    })
}

fn validate_curve_1d(shape: &[usize], arg: &str) -> SparsifyResult<()> {
    if shape.len() != 1 {
        return Err(SparsifyError::InvalidParameter {
            parameter: arg.to_string(),
            message: format!("sparsify requires a 1D tensor, got {}-D", shape.len()),
        });
    }
    Ok(())
}

fn to_host<R: Runtime<DType = DType>>(t: &Tensor<R>) -> SparsifyResult<Vec<f64>> {
    match t.dtype() {
        DType::F64 => Ok(t.try_to_vec()?),
        DType::F32 => {
            let data: Vec<f32> = t.try_to_vec()?;
            Ok(data.into_iter().map(f64::from).collect())
        }
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "sparsify",
        }
        .into()),
    }
}

fn to_device<R, C>(client: &C, data: &[f64], dtype: DType) -> SparsifyResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: RuntimeClient<R>,
{
    let device = client.device();
    let tensor = match dtype {
        // Values originated as f32, so the narrowing is exact.
        DType::F32 => {
            let narrowed: Vec<f32> = data.iter().map(|&v| v as f32).collect();
            Tensor::<R>::from_slice(&narrowed, &[narrowed.len()], device)?
        }
        _ => Tensor::<R>::from_slice(data, &[data.len()], device)?,
    };
    Ok(tensor)
}
