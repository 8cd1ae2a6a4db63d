// Sales domain model - one record per month, typed per channel

/// Named order sources, excluding the overall total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Entrega,
    Retirada,
    Salao,
    Saipos,
    Telefone,
    Ifood,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Entrega,
        Channel::Retirada,
        Channel::Salao,
        Channel::Saipos,
        Channel::Telefone,
        Channel::Ifood,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Entrega => "Entrega",
            Channel::Retirada => "Retirada",
            Channel::Salao => "Salao",
            Channel::Saipos => "Saipos",
            Channel::Telefone => "Telefone",
            Channel::Ifood => "Ifood",
        }
    }

    /// Dataset column holding this channel's order count (accent-free form).
    pub fn orders_column(&self) -> String {
        format!("{} Pedidos", self.label())
    }

    /// Dataset column holding this channel's monetary value (accent-free form).
    pub fn revenue_column(&self) -> String {
        format!("{} Valor", self.label())
    }

    fn index(self) -> usize {
        match self {
            Channel::Entrega => 0,
            Channel::Retirada => 1,
            Channel::Salao => 2,
            Channel::Saipos => 3,
            Channel::Telefone => 4,
            Channel::Ifood => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Orders,
    Revenue,
}

/// A typed reference to one numeric column of the dataset. Replaces
/// string-keyed column access so an unknown field is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesField {
    Total(Measure),
    Channel(Channel, Measure),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSales {
    pub orders: u64,
    pub revenue: f64,
}

impl ChannelSales {
    pub fn new(orders: u64, revenue: f64) -> Self {
        Self { orders, revenue }
    }
}

/// One month's sales across all channels, keys and strings already
/// accent-normalized by the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub month: String,
    pub total: ChannelSales,
    channels: [ChannelSales; 6],
}

impl SalesRecord {
    pub fn new(month: String, total: ChannelSales, channels: [ChannelSales; 6]) -> Self {
        Self {
            month,
            total,
            channels,
        }
    }

    pub fn channel(&self, channel: Channel) -> &ChannelSales {
        &self.channels[channel.index()]
    }

    /// Value of a typed field, as plotted (order counts widen to f64).
    pub fn field(&self, field: SalesField) -> f64 {
        let (sales, measure) = match field {
            SalesField::Total(measure) => (&self.total, measure),
            SalesField::Channel(channel, measure) => (self.channel(channel), measure),
        };
        match measure {
            Measure::Orders => sales.orders as f64,
            Measure::Revenue => sales.revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SalesRecord {
        let mut channels = [ChannelSales::new(0, 0.0); 6];
        channels[0] = ChannelSales::new(4, 120.5); // Entrega
        channels[5] = ChannelSales::new(7, 301.0); // Ifood
        SalesRecord::new("Jan".to_string(), ChannelSales::new(11, 421.5), channels)
    }

    #[test]
    fn test_field_total() {
        let record = record();
        assert_eq!(record.field(SalesField::Total(Measure::Orders)), 11.0);
        assert_eq!(record.field(SalesField::Total(Measure::Revenue)), 421.5);
    }

    #[test]
    fn test_field_channel() {
        let record = record();
        assert_eq!(
            record.field(SalesField::Channel(Channel::Ifood, Measure::Orders)),
            7.0
        );
        assert_eq!(
            record.field(SalesField::Channel(Channel::Entrega, Measure::Revenue)),
            120.5
        );
    }

    #[test]
    fn test_column_names() {
        assert_eq!(Channel::Telefone.orders_column(), "Telefone Pedidos");
        assert_eq!(Channel::Salao.revenue_column(), "Salao Valor");
    }
}
