use crate::domain::tile::Rank;

/// Битовая маска сил номиналов.
///
/// Используем 15 бит: бит 0 = сила 1 (тройка), бит 14 = сила 15 (двойка).
pub type StrengthMask = u16;

/// Получить битовую маску для одного номинала.
pub fn rank_to_bit(rank: Rank) -> StrengthMask {
    1u16 << (rank.strength() - 1)
}

/// Построить маску из списка номиналов.
pub fn mask_from_ranks(ranks: impl IntoIterator<Item = Rank>) -> StrengthMask {
    ranks.into_iter().fold(0, |mask, r| mask | rank_to_bit(r))
}

/// Идут ли `count` различных сил подряд.
///
/// Маска сдвигается к нулевому биту; непрерывный отрезок длины k
/// после сдвига равен 2^k - 1.
pub fn is_contiguous_run(mask: StrengthMask, count: u32) -> bool {
    if mask == 0 || mask.count_ones() != count {
        return false;
    }
    let shifted = mask >> mask.trailing_zeros();
    shifted == (1u16 << count) - 1
}

/// Сила старшего номинала в маске.
pub fn highest_strength(mask: StrengthMask) -> Option<u8> {
    if mask == 0 {
        None
    } else {
        Some((16 - mask.leading_zeros()) as u8)
    }
}
