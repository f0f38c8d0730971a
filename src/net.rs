use ndarray::ArrayD;

/// A learnable tensor of a network, together with its trainable flag.
///
/// Frozen parameters keep their values during optimization (e.g. the backbone
/// of a fine-tuned classifier) but still belong to the net.
#[derive(Debug, Clone)]
pub struct Param {
    tensor: ArrayD<f32>,
    trainable: bool,
}

impl Param {
    /// Wraps `tensor` as a parameter updated during optimization.
    pub fn trainable(tensor: ArrayD<f32>) -> Self {
        Self {
            tensor,
            trainable: true,
        }
    }

    /// Wraps `tensor` as a parameter excluded from optimization.
    pub fn frozen(tensor: ArrayD<f32>) -> Self {
        Self {
            tensor,
            trainable: false,
        }
    }

    /// Returns the number of scalar elements in the tensor.
    pub fn numel(&self) -> usize {
        self.tensor.len()
    }

    pub fn is_trainable(&self) -> bool {
        self.trainable
    }

    pub fn tensor(&self) -> &ArrayD<f32> {
        &self.tensor
    }
}

/// The closed set of layer kinds the training utilities distinguish.
///
/// Convolution and dense weights are the ones that receive weight decay;
/// `Norm` covers normalization scale/shift pairs, `Affine` any other layer
/// kind that still exposes a weight or bias, and `Stateless` layers (pooling,
/// activations) own no parameters at all.
#[derive(Debug, Clone)]
pub enum Layer {
    Conv2d { weight: Param, bias: Option<Param> },
    Linear { weight: Param, bias: Option<Param> },
    Norm { weight: Param, bias: Param },
    Affine { weight: Option<Param>, bias: Option<Param> },
    Stateless,
}

impl Layer {
    pub fn conv2d(weight: Param, bias: Option<Param>) -> Self {
        Self::Conv2d { weight, bias }
    }

    pub fn linear(weight: Param, bias: Option<Param>) -> Self {
        Self::Linear { weight, bias }
    }

    pub fn norm(weight: Param, bias: Param) -> Self {
        Self::Norm { weight, bias }
    }

    /// Iterates this layer's parameters, weight before bias.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        let params: Vec<&Param> = match self {
            Layer::Conv2d { weight, bias } | Layer::Linear { weight, bias } => {
                std::iter::once(weight).chain(bias.as_ref()).collect()
            }
            Layer::Norm { weight, bias } => vec![weight, bias],
            Layer::Affine { weight, bias } => weight.iter().chain(bias.iter()).collect(),
            Layer::Stateless => Vec::new(),
        };

        params.into_iter()
    }
}

/// A network seen as the ordered list of its layers.
///
/// This is the view the training-loop utilities need: which parameters exist,
/// of what kind, and whether they are trainable. Forward/backward computation
/// lives elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Net {
    layers: Vec<Layer>,
}

impl Net {
    /// Returns a new `Net`.
    ///
    /// # Arguments
    /// * `layers` - The layers the net is composed of.
    pub fn new<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Layer>,
    {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterates every parameter tensor of the net in layer order.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.layers.iter().flat_map(Layer::params)
    }

    /// Returns the number of parameter tensors, trainable or not.
    pub fn num_params(&self) -> usize {
        self.params().count()
    }
}

/// Sums the element counts of the net's trainable parameters.
///
/// A frozen tensor contributes nothing; a trainable 3x4 matrix contributes 12.
pub fn count_params(net: &Net) -> usize {
    net.params()
        .filter(|p| p.is_trainable())
        .map(Param::numel)
        .sum()
}

#[cfg(test)]
mod tests {
    use ndarray::ArrayD;

    use super::*;

    fn tensor(shape: &[usize]) -> ArrayD<f32> {
        ArrayD::zeros(shape)
    }

    #[test]
    fn counts_only_trainable_elements() {
        let net = Net::new([
            Layer::linear(
                Param::trainable(tensor(&[2, 5])),
                Some(Param::trainable(tensor(&[5]))),
            ),
            Layer::conv2d(Param::frozen(tensor(&[4, 5, 5])), None),
        ]);

        assert_eq!(count_params(&net), 15);
        assert_eq!(net.num_params(), 3);
    }

    #[test]
    fn stateless_layers_have_no_params() {
        let net = Net::new([Layer::Stateless, Layer::Stateless]);

        assert_eq!(net.num_params(), 0);
        assert_eq!(count_params(&net), 0);
    }

    #[test]
    fn layer_yields_weight_before_bias() {
        let layer = Layer::norm(
            Param::trainable(tensor(&[8])),
            Param::trainable(tensor(&[8])),
        );

        assert_eq!(layer.params().count(), 2);
    }
}
